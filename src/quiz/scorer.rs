use crate::quiz::Question;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
    pub percentage: f64,
}

impl Score {
    /// Percentage with one decimal place, e.g. `66.7`.
    pub fn percentage_label(&self) -> String {
        format!("{:.1}", self.percentage)
    }
}

/// Positional scoring. Unanswered questions count towards the total only.
pub fn score(questions: &[Question], answers: &[String]) -> Score {
    let correct = questions
        .iter()
        .zip(answers)
        .filter(|(question, answer)| question.is_correct(answer))
        .count();
    let total = questions.len();
    let percentage = if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64 * 100.0
    };

    Score {
        correct,
        total,
        percentage,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Correct { answer: String },
    Incorrect { answer: String, correct: String },
    NotAnswered { correct: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    pub number: usize,
    pub question: String,
    pub outcome: Outcome,
}

pub fn review(questions: &[Question], answers: &[String]) -> Vec<ReviewItem> {
    questions
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let outcome = match answers.get(i) {
                Some(answer) if question.is_correct(answer) => Outcome::Correct {
                    answer: answer.clone(),
                },
                Some(answer) => Outcome::Incorrect {
                    answer: answer.clone(),
                    correct: question.correct_answer.clone(),
                },
                None => Outcome::NotAnswered {
                    correct: question.correct_answer.clone(),
                },
            };
            ReviewItem {
                number: i + 1,
                question: question.text.clone(),
                outcome,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::bank;

    fn answers(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    fn quiz_questions() -> Vec<Question> {
        let mut questions = bank::static_questions();
        questions.push(bank::fallback_question());
        questions
    }

    #[test]
    fn all_correct() {
        let result = score(
            &quiz_questions(),
            &answers(&["$600", "Annual Percentage Rate", "To reduce risk"]),
        );
        assert_eq!((result.correct, result.total), (3, 3));
        assert_eq!(result.percentage_label(), "100.0");
    }

    #[test]
    fn two_of_three() {
        let result = score(
            &quiz_questions(),
            &answers(&["$600", "Annual Profit Rate", "To reduce risk"]),
        );
        assert_eq!((result.correct, result.total), (2, 3));
        assert_eq!(result.percentage_label(), "66.7");
    }

    #[test]
    fn partial_answer_log_counts_full_total() {
        let questions = quiz_questions();
        let result = score(&questions, &answers(&["$600"]));
        assert_eq!((result.correct, result.total), (1, 3));
        assert_eq!(result.percentage_label(), "33.3");

        let items = review(&questions, &answers(&["$600"]));
        assert_eq!(items.len(), 3);
        assert_eq!(
            items[2].outcome,
            Outcome::NotAnswered {
                correct: "To reduce risk".to_string()
            }
        );
    }

    #[test]
    fn score_is_bounded_by_total() {
        let questions = quiz_questions();
        let logs = [
            answers(&[]),
            answers(&["$400", "Asset Price Return", "To avoid taxes"]),
            answers(&["$600", "Annual Percentage Rate", "To reduce risk"]),
        ];
        for entries in logs.iter() {
            let result = score(&questions, entries);
            assert!(result.correct <= result.total);
            assert_eq!(
                result.percentage,
                result.correct as f64 / result.total as f64 * 100.0
            );
        }
    }

    #[test]
    fn empty_question_set_scores_zero() {
        let result = score(&[], &[]);
        assert_eq!(result.total, 0);
        assert_eq!(result.percentage_label(), "0.0");
    }

    #[test]
    fn review_reports_wrong_answers_with_the_fix() {
        let items = review(&quiz_questions(), &answers(&["$800", "Annual Percentage Rate"]));
        assert_eq!(items[0].number, 1);
        assert_eq!(
            items[0].outcome,
            Outcome::Incorrect {
                answer: "$800".to_string(),
                correct: "$600".to_string()
            }
        );
        assert_eq!(
            items[1].outcome,
            Outcome::Correct {
                answer: "Annual Percentage Rate".to_string()
            }
        );
    }
}
