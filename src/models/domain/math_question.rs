use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const ANSWER_TOLERANCE: f64 = 1e-6;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct MathQuestion {
    /// A purely numerical expression, e.g. "15 * 7".
    pub question: String,
    /// The single numeric answer.
    pub answer: f64,
}

impl MathQuestion {
    pub fn new(question: &str, answer: f64) -> Self {
        Self {
            question: question.to_string(),
            answer,
        }
    }

    pub fn is_correct(&self, submitted: f64) -> bool {
        submitted.is_finite() && (submitted - self.answer).abs() <= ANSWER_TOLERANCE
    }
}

/// Questions handed out to a student and not yet answered.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveRound {
    pub username: String,
    pub grade: u8,
    pub started_on: NaiveDate,
    pub questions: Vec<MathQuestion>,
}

impl ActiveRound {
    /// Counts answers matching the question at the same position.
    pub fn count_correct(&self, answers: &[Option<f64>]) -> usize {
        self.questions
            .iter()
            .zip(answers.iter())
            .filter(|(question, answer)| answer.map(|a| question.is_correct(a)).unwrap_or(false))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_compare_with_tolerance() {
        let question = MathQuestion::new("0.1 + 0.2", 0.3);
        assert!(question.is_correct(0.1 + 0.2));
        assert!(!question.is_correct(0.31));
        assert!(!question.is_correct(f64::NAN));
    }

    #[test]
    fn missing_and_extra_answers_are_not_counted() {
        let round = ActiveRound {
            username: "maya".to_string(),
            grade: 4,
            started_on: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            questions: vec![
                MathQuestion::new("2 + 2", 4.0),
                MathQuestion::new("3 * 3", 9.0),
                MathQuestion::new("10 / 2", 5.0),
            ],
        };

        assert_eq!(round.count_correct(&[Some(4.0), None, Some(5.0), Some(1.0)]), 2);
        assert_eq!(round.count_correct(&[Some(4.0)]), 1);
        assert_eq!(round.count_correct(&[]), 0);
    }
}
