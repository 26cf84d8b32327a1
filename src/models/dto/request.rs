use once_cell::sync::Lazy;
use serde::Deserialize;
use validator::Validate;

use crate::models::domain::student::{MAX_GRADE, MIN_GRADE};

pub static USERNAME_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("USERNAME_REGEX is a valid regex pattern")
});

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 50))]
    pub username: String,

    /// Only read when creating a new student; the service checks its range.
    pub grade: Option<u8>,

    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitRoundRequest {
    #[validate(length(max = 100))]
    pub answers: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ImageRequest {
    #[validate(length(min = 1, max = 1000))]
    pub prompt: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RosterSort {
    #[default]
    Username,
    Grade,
    Streak,
    #[serde(alias = "highest_score")]
    HighestScore,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterQuery {
    pub search: Option<String>,
    #[serde(default)]
    pub sort_by: RosterSort,
}

pub fn is_valid_grade(grade: u8) -> bool {
    (MIN_GRADE..=MAX_GRADE).contains(&grade)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_regex_accepts_simple_names() {
        assert!(USERNAME_REGEX.is_match("maya_5"));
        assert!(USERNAME_REGEX.is_match("j.smith-2"));
        assert!(!USERNAME_REGEX.is_match("maya smith"));
        assert!(!USERNAME_REGEX.is_match(""));
    }

    #[test]
    fn login_request_leaves_grade_range_to_the_service() {
        let request = LoginRequest {
            username: "maya".to_string(),
            grade: Some(12),
            password: None,
        };
        assert!(request.validate().is_ok());

        let request = LoginRequest {
            username: String::new(),
            ..request
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn image_request_bounds_prompt_length() {
        assert!(ImageRequest { prompt: "a fox".to_string() }.validate().is_ok());
        assert!(ImageRequest { prompt: String::new() }.validate().is_err());
        assert!(ImageRequest { prompt: "x".repeat(1001) }.validate().is_err());
    }

    #[test]
    fn roster_sort_accepts_both_spellings() {
        let query: RosterSort = serde_json::from_str("\"highestScore\"").unwrap();
        assert_eq!(query, RosterSort::HighestScore);
        let query: RosterSort = serde_json::from_str("\"highest_score\"").unwrap();
        assert_eq!(query, RosterSort::HighestScore);
    }

    #[test]
    fn grade_bounds() {
        assert!(!is_valid_grade(2));
        assert!(is_valid_grade(3));
        assert!(is_valid_grade(9));
        assert!(!is_valid_grade(10));
    }
}
