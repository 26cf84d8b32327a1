use chrono::NaiveDate;
use serde::Serialize;

use crate::models::domain::{
    LoggedInUser, MedalProgress, Session, Student, UserRole,
};

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub role: UserRole,
}

impl From<Session> for LoginResponse {
    fn from(session: Session) -> Self {
        LoginResponse {
            token: session.token,
            username: session.user.username,
            role: session.user.role,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDashboard {
    pub student: Student,
    pub has_played_today: bool,
    pub medals: Vec<MedalProgress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub username: String,
    pub grade: u8,
    pub streak: u32,
    pub highest_score: u8,
    pub last_played_date: Option<NaiveDate>,
}

impl From<Student> for RosterEntry {
    fn from(student: Student) -> Self {
        RosterEntry {
            username: student.username,
            grade: student.grade,
            streak: student.streak,
            highest_score: student.highest_score,
            last_played_date: student.last_played_date,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundQuestions {
    pub grade: u8,
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub score: u8,
    pub correct_count: usize,
    pub total_questions: usize,
    pub student: Student,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub user: LoggedInUser,
}
