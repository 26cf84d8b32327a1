use std::{cmp::Ordering, sync::Arc};

use crate::{
    errors::AppResult,
    models::dto::{request::RosterSort, response::RosterEntry},
    repositories::StudentRepository,
};

pub struct RosterService {
    students: Arc<dyn StudentRepository>,
}

impl RosterService {
    pub fn new(students: Arc<dyn StudentRepository>) -> Self {
        Self { students }
    }

    pub async fn list_students(
        &self,
        search: Option<&str>,
        sort_by: RosterSort,
    ) -> AppResult<Vec<RosterEntry>> {
        let needle = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        let mut entries: Vec<RosterEntry> = self
            .students
            .find_all()
            .await?
            .into_iter()
            .filter(|s| {
                needle
                    .as_ref()
                    .map(|n| s.username.to_lowercase().contains(n.as_str()))
                    .unwrap_or(true)
            })
            .map(RosterEntry::from)
            .collect();

        entries.sort_by(|a, b| match sort_by {
            RosterSort::Username => by_username(a, b),
            RosterSort::Grade => b.grade.cmp(&a.grade).then_with(|| by_username(a, b)),
            RosterSort::Streak => b.streak.cmp(&a.streak).then_with(|| by_username(a, b)),
            RosterSort::HighestScore => b
                .highest_score
                .cmp(&a.highest_score)
                .then_with(|| by_username(a, b)),
        });

        Ok(entries)
    }
}

fn by_username(a: &RosterEntry, b: &RosterEntry) -> Ordering {
    a.username
        .to_lowercase()
        .cmp(&b.username.to_lowercase())
        .then_with(|| a.username.cmp(&b.username))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::domain::Student,
        repositories::student_repository::MockStudentRepository,
    };

    fn roster() -> RosterService {
        let mut students = MockStudentRepository::new();
        students.expect_find_all().returning(|| {
            let mut bob = Student::new("bob", 4);
            bob.streak = 5;
            bob.highest_score = 70;
            let mut alice = Student::new("Alice", 7);
            alice.streak = 2;
            alice.highest_score = 90;
            let mut carla = Student::new("carla", 4);
            carla.streak = 5;
            carla.highest_score = 40;
            Ok(vec![bob, alice, carla])
        });
        RosterService::new(Arc::new(students))
    }

    fn names(entries: &[RosterEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.username.as_str()).collect()
    }

    #[tokio::test]
    async fn test_default_sort_is_case_insensitive_username() {
        let entries = roster().list_students(None, RosterSort::Username).await.unwrap();
        assert_eq!(names(&entries), vec!["Alice", "bob", "carla"]);
    }

    #[tokio::test]
    async fn test_numeric_sorts_are_descending_with_username_ties() {
        let roster = roster();

        let by_streak = roster.list_students(None, RosterSort::Streak).await.unwrap();
        assert_eq!(names(&by_streak), vec!["bob", "carla", "Alice"]);

        let by_score = roster.list_students(None, RosterSort::HighestScore).await.unwrap();
        assert_eq!(names(&by_score), vec!["Alice", "bob", "carla"]);

        let by_grade = roster.list_students(None, RosterSort::Grade).await.unwrap();
        assert_eq!(names(&by_grade), vec!["Alice", "bob", "carla"]);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let roster = roster();

        let entries = roster.list_students(Some("AL"), RosterSort::Username).await.unwrap();
        assert_eq!(names(&entries), vec!["Alice"]);

        let entries = roster.list_students(Some("  "), RosterSort::Username).await.unwrap();
        assert_eq!(entries.len(), 3);

        let entries = roster.list_students(Some("zed"), RosterSort::Username).await.unwrap();
        assert!(entries.is_empty());
    }
}
