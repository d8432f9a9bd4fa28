//! Telegram HTML texts sent by the bot.

use teloxide::utils::html::escape;

use crate::quiz::scorer::{Outcome, ReviewItem, Score};
use crate::quiz::session::{ChatMessage, Role};
use crate::quiz::Question;

// Telegram rejects messages over 4096 characters
const MESSAGE_LIMIT: usize = 4000;
const SEPARATOR: &str = "\n---\n";
// Characters of a user question echoed back in the transcript
const ECHO_LIMIT: usize = 500;
const CHAT_HISTORY_HEADER: &str = "💬 <b>Chat History</b>";

pub const WELCOME: &str = "<b>Financial Literacy Quiz</b>

Welcome to the Financial Literacy Quiz! Test your knowledge and learn more about managing your finances.
This quiz covers topics such as budgeting, saving, investing, and credit management.";

pub const ASK_NAME: &str = "Type in your name:";
pub const CHOOSE_OPTION: &str = "Please choose one of the options below.";
pub const CHAT_CLEARED: &str = "Chat history cleared.";
pub const NO_CHAT_HISTORY: &str = "No questions asked yet. Try one of the quick questions!";

pub const ASSISTANT_INTRO: &str = "🤖 <b>Financial Learning Assistant</b>
Ask me about any question you got wrong, and I'll explain the concept in detail!

Ask about any financial concept (e.g. <i>Why is the 30% rule important?</i> or <i>What does APR mean?</i>) or use the quick question buttons.";

pub fn greeting(name: &str) -> String {
    format!("Hello {}. If you're ready, hit start quiz", escape(name))
}

pub fn quiz_intro(name: &str) -> String {
    format!("Hello {}! Let's get started with the quiz.", escape(name))
}

pub fn question(number: usize, question: &Question) -> String {
    format!(
        "<b>Question {}</b>\n{}\n\nChoose your answer:",
        number,
        escape(&question.text)
    )
}

pub fn results(name: &str, score: &Score) -> String {
    format!(
        "<b>Quiz Complete!</b>\nGreat job, {}!\n\nYour score: {}/{} ({}%)",
        escape(name),
        score.correct,
        score.total,
        score.percentage_label()
    )
}

pub fn review(items: &[ReviewItem]) -> String {
    let blocks = items
        .iter()
        .map(|item| {
            let header = format!("<b>Question {}:</b> {}", item.number, escape(&item.question));
            let body = match &item.outcome {
                Outcome::Correct { answer } => format!("Your answer: {} ✅", escape(answer)),
                Outcome::Incorrect { answer, correct } => format!(
                    "Your answer: {} ❌\nCorrect answer: {}",
                    escape(answer),
                    escape(correct)
                ),
                Outcome::NotAnswered { correct } => format!(
                    "Your answer: Not answered ❌\nCorrect answer: {}",
                    escape(correct)
                ),
            };
            format!("{}\n{}", header, body)
        })
        .collect::<Vec<_>>();

    format!("<b>Review:</b>\n\n{}", blocks.join(SEPARATOR))
}

/// Renders the transcript, split into as many messages as needed.
pub fn chat_history(history: &[ChatMessage]) -> Vec<String> {
    if history.is_empty() {
        return vec![NO_CHAT_HISTORY.to_string()];
    }

    let mut pages = Vec::new();
    let mut page = String::from(CHAT_HISTORY_HEADER);
    for message in history {
        let block = match message.role {
            Role::User => format!("<b>You:</b> {}", escape(&shorten(&message.content))),
            // Assistant replies are already HTML
            Role::Assistant => format!("<b>Learning Assistant:</b>\n{}", message.content),
        };

        let fits = page.len() + SEPARATOR.len() + block.len() <= MESSAGE_LIMIT;
        if !fits && page != CHAT_HISTORY_HEADER {
            pages.push(std::mem::replace(&mut page, block));
        } else {
            page.push_str(SEPARATOR);
            page.push_str(&block);
        }
    }
    pages.push(page);

    pages
}

/// Cuts `text` to `ECHO_LIMIT` characters. Applied before escaping so no
/// entity is ever split.
fn shorten(text: &str) -> String {
    match text.char_indices().nth(ECHO_LIMIT) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}
