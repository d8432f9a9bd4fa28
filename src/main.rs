mod config;
mod messages;
mod quiz;

use std::sync::Arc;

use dotenv::dotenv;
use quiz::{
    assistant::QuickQuestion,
    bank,
    market::{PriceHistory, YahooFinance},
    session::{Phase, Session},
    Question,
};
use teloxide::{
    dispatching::dialogue::InMemStorage,
    prelude::*,
    types::{ChatAction, KeyboardButton, KeyboardMarkup, KeyboardRemove, ParseMode},
};

type QuizDialogue = Dialogue<State, InMemStorage<State>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(Clone, Default)]
pub enum State {
    #[default]
    Start,
    ReceiveFullName,
    ReadyToStart {
        name: String,
    },
    InQuiz {
        session: Session,
    },
    Chat {
        session: Session,
    },
}

#[tokio::main]
async fn main() {
    let dotenv_loaded = dotenv().is_ok();

    pretty_env_logger::init();
    if !dotenv_loaded {
        log::warn!("No .env file found, reading configuration from the environment only");
    }
    log::info!("Starting financial literacy quiz bot...");

    let config = config::Config::from_env();
    let bot = Bot::from_env();

    log::info!("Market data provider: {}", config.market_data_url);
    let market: Arc<dyn PriceHistory> = Arc::new(YahooFinance::new(&config));

    Dispatcher::builder(
        bot,
        Update::filter_message()
            .enter_dialogue::<Message, InMemStorage<State>, State>()
            .branch(dptree::case![State::Start].endpoint(start))
            .branch(dptree::case![State::ReceiveFullName].endpoint(receive_full_name))
            .branch(dptree::case![State::ReadyToStart { name }].endpoint(
                move |bot: Bot, dialogue: QuizDialogue, name: String, msg: Message| {
                    ready_to_start(market.clone(), bot, dialogue, name, msg)
                },
            ))
            .branch(dptree::case![State::InQuiz { session }].endpoint(in_quiz))
            .branch(dptree::case![State::Chat { session }].endpoint(chat)),
    )
    .dependencies(dptree::deps![InMemStorage::<State>::new()])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;
}

const START_QUIZ: &str = "Start Quiz";
const CHAT_HISTORY: &str = "Chat History";
const CLEAR_CHAT_HISTORY: &str = "Clear Chat History";
const TAKE_QUIZ_AGAIN: &str = "Take Quiz Again";

async fn start(bot: Bot, dialogue: QuizDialogue, msg: Message) -> HandlerResult {
    welcome(&bot, &dialogue, msg.chat.id).await
}

/// Title screen followed by the name prompt, on first contact and on restart.
async fn welcome(bot: &Bot, dialogue: &QuizDialogue, chat_id: ChatId) -> HandlerResult {
    bot.send_message(chat_id, messages::WELCOME)
        .parse_mode(ParseMode::Html)
        .await?;

    ask_for_name(bot, dialogue, chat_id).await
}

async fn ask_for_name(bot: &Bot, dialogue: &QuizDialogue, chat_id: ChatId) -> HandlerResult {
    bot.send_message(chat_id, messages::ASK_NAME)
        .reply_markup(KeyboardRemove::new())
        .await?;

    dialogue.update(State::ReceiveFullName).await?;
    Ok(())
}

async fn receive_full_name(bot: Bot, dialogue: QuizDialogue, msg: Message) -> HandlerResult {
    let name = msg.text().map(str::trim).filter(|name| !name.is_empty());
    match name {
        Some(name) => {
            bot.send_message(msg.chat.id, messages::greeting(name))
                .parse_mode(ParseMode::Html)
                .reply_markup(KeyboardMarkup::new(vec![vec![KeyboardButton::new(
                    START_QUIZ,
                )]]))
                .await?;

            dialogue
                .update(State::ReadyToStart {
                    name: name.to_string(),
                })
                .await?;
        }
        None => {
            bot.send_message(msg.chat.id, messages::ASK_NAME).await?;
        }
    }
    Ok(())
}

async fn ready_to_start(
    market: Arc<dyn PriceHistory>,
    bot: Bot,
    dialogue: QuizDialogue,
    name: String,
    msg: Message,
) -> HandlerResult {
    if msg.text() != Some(START_QUIZ) {
        // Anything else is a corrected name
        return receive_full_name(bot, dialogue, msg).await;
    }

    // Failing to show "typing..." is harmless
    let _ = bot.send_chat_action(msg.chat.id, ChatAction::Typing).await;

    let ticker = bank::pick_ticker(&mut rand::thread_rng());
    let questions = bank::build_question_set(market.as_ref(), ticker).await;

    let mut session = Session::default();
    if let Err(err) = session.start(&name, questions) {
        log::warn!("Could not start the quiz: {}", err);
        return ask_for_name(&bot, &dialogue, msg.chat.id).await;
    }

    bot.send_message(msg.chat.id, messages::quiz_intro(&session.user_name))
        .parse_mode(ParseMode::Html)
        .await?;
    send_current_question(&bot, msg.chat.id, &session).await?;

    dialogue.update(State::InQuiz { session }).await?;
    Ok(())
}

fn options_keyboard(question: &Question) -> KeyboardMarkup {
    KeyboardMarkup::new(
        question
            .options
            .iter()
            .map(|option| vec![KeyboardButton::new(option.clone())])
            .collect::<Vec<_>>(),
    )
}

fn chat_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        QuickQuestion::ALL
            .iter()
            .map(|quick| KeyboardButton::new(quick.label()))
            .collect::<Vec<_>>(),
        vec![
            KeyboardButton::new(CHAT_HISTORY),
            KeyboardButton::new(CLEAR_CHAT_HISTORY),
        ],
        vec![KeyboardButton::new(TAKE_QUIZ_AGAIN)],
    ])
}

async fn send_current_question(bot: &Bot, chat_id: ChatId, session: &Session) -> HandlerResult {
    if let Some(question) = session.current_question() {
        bot.send_message(
            chat_id,
            messages::question(session.current_index + 1, question),
        )
        .parse_mode(ParseMode::Html)
        .reply_markup(options_keyboard(question))
        .await?;
    }
    Ok(())
}

async fn in_quiz(
    bot: Bot,
    dialogue: QuizDialogue,
    mut session: Session,
    msg: Message,
) -> HandlerResult {
    let answer = msg.text().unwrap_or_default();

    // Only one of the offered options counts as a selection
    if let Some(question) = session.current_question() {
        if !question.has_option(answer) {
            bot.send_message(msg.chat.id, messages::CHOOSE_OPTION)
                .reply_markup(options_keyboard(question))
                .await?;
            return Ok(());
        }
    }

    match session.submit_answer(answer) {
        Ok(Phase::Complete) => {
            send_results(&bot, msg.chat.id, &session).await?;
            dialogue.update(State::Chat { session }).await?;
        }
        Ok(_) => {
            send_current_question(&bot, msg.chat.id, &session).await?;
            dialogue.update(State::InQuiz { session }).await?;
        }
        Err(err) => {
            log::warn!("Ignoring answer from chat {}: {}", msg.chat.id.0, err);
        }
    }
    Ok(())
}

async fn send_results(bot: &Bot, chat_id: ChatId, session: &Session) -> HandlerResult {
    let score = session.score();
    bot.send_message(chat_id, messages::results(&session.user_name, &score))
        .parse_mode(ParseMode::Html)
        .reply_markup(KeyboardRemove::new())
        .await?;
    bot.send_message(chat_id, messages::review(&session.review()))
        .parse_mode(ParseMode::Html)
        .await?;
    bot.send_message(chat_id, messages::ASSISTANT_INTRO)
        .parse_mode(ParseMode::Html)
        .reply_markup(chat_keyboard())
        .await?;
    Ok(())
}

async fn chat(bot: Bot, dialogue: QuizDialogue, mut session: Session, msg: Message) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    match text {
        TAKE_QUIZ_AGAIN => {
            log::info!("{} is taking the quiz again", session.user_name);
            session.restart();
            return welcome(&bot, &dialogue, msg.chat.id).await;
        }
        CLEAR_CHAT_HISTORY => {
            session.clear_chat();
            bot.send_message(msg.chat.id, messages::CHAT_CLEARED)
                .reply_markup(chat_keyboard())
                .await?;
        }
        CHAT_HISTORY => {
            for page in messages::chat_history(&session.chat_history) {
                bot.send_message(msg.chat.id, page)
                    .parse_mode(ParseMode::Html)
                    .await?;
            }
        }
        _ => {
            let question = QuickQuestion::from_label(text)
                .map(|quick| quick.prompt())
                .unwrap_or(text);
            let Some(reply) = session.ask(question) else {
                return Ok(());
            };

            bot.send_message(msg.chat.id, reply)
                .parse_mode(ParseMode::Html)
                .reply_markup(chat_keyboard())
                .await?;
        }
    }

    dialogue.update(State::Chat { session }).await?;
    Ok(())
}
