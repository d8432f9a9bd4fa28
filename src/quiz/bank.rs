use rand::seq::SliceRandom;
use rand::Rng;

use super::market::{MarketDataError, PriceHistory};
use crate::quiz;

pub const TICKERS: [&str; 5] = ["AAPL", "MSFT", "GOOGL", "AMZN", "TSLA"];

const STOCK_DISTRACTORS: [&str; 3] = ["$110", "$120", "$130"];
const INVESTED_DOLLARS: f64 = 100.0;

pub fn static_questions() -> Vec<quiz::Question> {
    vec![
        quiz::Question::new(
            "If you earn $2000/month, how much should you ideally spend on rent (30% rule)?",
            &["$400", "$600", "$800", "$1000"],
            "$600",
        ),
        quiz::Question::new(
            "What does APR stand for?",
            &[
                "Annual Percentage Rate",
                "Annual Profit Rate",
                "Asset Price Return",
                "Average Payment Ratio",
            ],
            "Annual Percentage Rate",
        ),
    ]
}

pub fn fallback_question() -> quiz::Question {
    quiz::Question::new(
        "What is the primary purpose of diversification in investing?",
        &[
            "To increase returns",
            "To reduce risk",
            "To avoid taxes",
            "To time the market",
        ],
        "To reduce risk",
    )
}

pub fn pick_ticker<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    // TICKERS is a non-empty const, choose can't come back empty
    TICKERS.choose(rng).copied().unwrap_or(TICKERS[0])
}

pub fn percent_change(first_close: f64, last_close: f64) -> f64 {
    (last_close - first_close) / first_close * 100.0
}

/// Builds the "what is $100 worth now" question from a close series.
/// Returns `None` when the series can't produce a sensible value.
pub fn stock_question(ticker: &str, closes: &[f64]) -> Option<quiz::Question> {
    let (first, last) = (*closes.first()?, *closes.last()?);
    if first == 0.0 {
        return None;
    }

    let change = percent_change(first, last);
    let final_value = INVESTED_DOLLARS * (1.0 + change / 100.0);
    if !final_value.is_finite() {
        return None;
    }
    let correct = format!("${}", final_value.round_ties_even() as i64);

    // A collision with one of the distractors is left as is
    let mut options = vec![correct.clone()];
    options.extend(STOCK_DISTRACTORS.iter().map(|d| d.to_string()));

    Some(quiz::Question {
        text: format!(
            "If you invested $100 in {} a year ago, approximately how much is it worth now?",
            ticker
        ),
        options,
        correct_answer: correct,
    })
}

/// Two static questions plus one built from `ticker`'s price history.
/// Makes exactly one call to `provider` and never fails.
pub async fn build_question_set<P>(provider: &P, ticker: &str) -> Vec<quiz::Question>
where
    P: PriceHistory + ?Sized,
{
    let stock = provider.closing_prices(ticker).await.and_then(|closes| {
        stock_question(ticker, &closes).ok_or(MarketDataError::NoData)
    });

    let third = stock.unwrap_or_else(|err| {
        log::warn!(
            "No usable price data for {} ({}), using the diversification question",
            ticker,
            err
        );
        fallback_question()
    });

    let mut questions = static_questions();
    questions.push(third);
    return questions;
}
