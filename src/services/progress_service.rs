use std::sync::Arc;

use crate::{
    clock::Clock,
    errors::{AppError, AppResult},
    models::{
        domain::{student::MAX_SCORE, MedalProgress, Student},
        dto::response::StudentDashboard,
    },
    repositories::StudentRepository,
    services::user_locks::UserLocks,
};

/// Percentage of correct answers, rounded half up.
pub fn round_score(correct: usize, total: usize) -> AppResult<u8> {
    if total == 0 {
        return Err(AppError::ValidationError(
            "A round must contain at least one question".to_string(),
        ));
    }
    if correct > total {
        return Err(AppError::ValidationError(format!(
            "Correct answers ({}) exceed total questions ({})",
            correct, total
        )));
    }

    let score = (correct * 200 + total) / (2 * total);
    Ok(score as u8)
}

pub struct ProgressService {
    students: Arc<dyn StudentRepository>,
    clock: Arc<dyn Clock>,
    locks: Arc<UserLocks>,
}

impl ProgressService {
    pub fn new(
        students: Arc<dyn StudentRepository>,
        clock: Arc<dyn Clock>,
        locks: Arc<UserLocks>,
    ) -> Self {
        Self {
            students,
            clock,
            locks,
        }
    }

    pub async fn get_student(&self, username: &str) -> AppResult<Student> {
        self.students
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student with username '{}' not found", username)))
    }

    pub async fn dashboard(&self, username: &str) -> AppResult<StudentDashboard> {
        let student = self.get_student(username).await?;
        let today = self.clock.today();

        Ok(StudentDashboard {
            has_played_today: student.has_played_on(today),
            medals: MedalProgress::all_for_streak(student.streak),
            student,
        })
    }

    pub async fn has_played_today(&self, username: &str) -> AppResult<bool> {
        let student = self.get_student(username).await?;
        Ok(student.has_played_on(self.clock.today()))
    }

    /// Records a finished round: streak, score history and highest score.
    pub async fn update_student_after_game(&self, username: &str, score: u8) -> AppResult<Student> {
        if score > MAX_SCORE {
            return Err(AppError::ValidationError(format!(
                "Score must be between 0 and {}, got {}",
                MAX_SCORE, score
            )));
        }

        let _guard = self.locks.acquire(username).await;

        let mut student = self.get_student(username).await?;
        let today = self.clock.today();
        let previous_streak = student.streak;

        student.record_round(today, score);
        let student = self.students.update(student).await?;

        log::info!(
            "Recorded round for '{}' on {}: score {}%, streak {} -> {}",
            username,
            today,
            score,
            previous_streak,
            student.streak
        );

        Ok(student)
    }
}
