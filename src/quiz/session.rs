use crate::quiz::{assistant, scorer, Question, QuizError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Complete,
}

/// Everything one user has done in the current run of the quiz.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user_name: String,
    pub questions: Vec<Question>,
    pub answers: Vec<String>,
    pub current_index: usize,
    pub chat_history: Vec<ChatMessage>,
}

impl Session {
    pub fn phase(&self) -> Phase {
        if self.questions.is_empty() {
            Phase::NotStarted
        } else if self.current_index < self.questions.len() {
            Phase::InProgress
        } else {
            Phase::Complete
        }
    }

    /// Begins a fresh run. A blank name leaves the session untouched.
    pub fn start(&mut self, user_name: &str, questions: Vec<Question>) -> Result<(), QuizError> {
        let user_name = user_name.trim();
        if user_name.is_empty() {
            return Err(QuizError::EmptyName);
        }

        *self = Session {
            user_name: user_name.to_string(),
            questions,
            ..Session::default()
        };
        log::info!(
            "Quiz started for {} with {} questions",
            self.user_name,
            self.questions.len()
        );
        Ok(())
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// Records `answer` for the current question and moves on.
    /// The caller is expected to pass one of the question's options.
    pub fn submit_answer(&mut self, answer: &str) -> Result<Phase, QuizError> {
        if self.current_question().is_none() {
            return Err(QuizError::NoActiveQuestion);
        }

        self.answers.push(answer.to_string());
        self.current_index += 1;

        let phase = self.phase();
        if phase == Phase::Complete {
            log::info!("{} finished the quiz", self.user_name);
        }
        Ok(phase)
    }

    pub fn score(&self) -> scorer::Score {
        scorer::score(&self.questions, &self.answers)
    }

    pub fn review(&self) -> Vec<scorer::ReviewItem> {
        scorer::review(&self.questions, &self.answers)
    }

    /// Asks the assistant and keeps both sides of the exchange.
    /// Returns `None` for blank input.
    pub fn ask(&mut self, question: &str) -> Option<&'static str> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }

        let reply = assistant::respond(question);
        self.chat_history.push(ChatMessage {
            role: Role::User,
            content: question.to_string(),
        });
        self.chat_history.push(ChatMessage {
            role: Role::Assistant,
            content: reply.to_string(),
        });
        Some(reply)
    }

    pub fn clear_chat(&mut self) {
        self.chat_history.clear();
    }

    pub fn restart(&mut self) {
        *self = Session::default();
    }
}
