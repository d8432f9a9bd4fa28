pub mod assistant;
pub mod bank;
pub mod market;
pub mod scorer;
pub mod session;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    pub fn new(text: impl Into<String>, options: &[&str], correct_answer: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct_answer.into(),
        }
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("user name must not be blank")]
    EmptyName,

    #[error("there is no question waiting for an answer")]
    NoActiveQuestion,
}
