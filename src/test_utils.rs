#[cfg(test)]
pub mod fixtures {
    use chrono::NaiveDate;

    use crate::models::domain::Student;

    pub fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("fixture dates are valid")
    }

    /// Creates a standard student who has never played
    pub fn test_student() -> Student {
        Student::new("teststudent", 5)
    }

    /// Creates several students for roster tests
    pub fn test_students() -> Vec<Student> {
        vec![
            Student::with_history("maya", 5, 3, Some(date("2024-01-03")), &[(date("2024-01-03"), 80)]),
            Student::with_history("sam", 3, 0, None, &[]),
            Student::with_history("Zoe", 9, 12, Some(date("2024-01-02")), &[(date("2024-01-02"), 100)]),
        ]
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_test_student() {
        let student = test_student();
        assert_eq!(student.username, "teststudent");
        assert_eq!(student.streak, 0);
    }

    #[test]
    fn test_fixtures_test_students_respect_highest_score() {
        for student in test_students() {
            let max = student.scores.iter().map(|s| s.score).max().unwrap_or(0);
            assert_eq!(student.highest_score, max);
        }
    }
}
