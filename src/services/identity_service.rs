use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

use crate::{
    clock::Clock,
    errors::{AppError, AppResult},
    models::{
        domain::{LoggedInUser, Session, Student},
        dto::request::{is_valid_grade, USERNAME_REGEX},
    },
    repositories::{SessionStore, StudentRepository},
    services::user_locks::UserLocks,
};

pub struct AdminCredentials {
    username: String,
    password_digest: [u8; 32],
}

impl AdminCredentials {
    pub fn new(username: &str, password: &SecretString) -> Self {
        Self {
            username: username.trim().to_lowercase(),
            password_digest: digest(password.expose_secret()),
        }
    }

    fn is_admin_name(&self, username: &str) -> bool {
        username.to_lowercase() == self.username
    }

    fn verify(&self, password: &str) -> bool {
        digest(password) == self.password_digest
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

/// Resolves login attempts to identities and owns the session lifecycle.
pub struct IdentityService {
    students: Arc<dyn StudentRepository>,
    sessions: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
    locks: Arc<UserLocks>,
    admin: AdminCredentials,
}

impl IdentityService {
    pub fn new(
        students: Arc<dyn StudentRepository>,
        sessions: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        locks: Arc<UserLocks>,
        admin: AdminCredentials,
    ) -> Self {
        Self {
            students,
            sessions,
            clock,
            locks,
            admin,
        }
    }

    pub async fn login(
        &self,
        username: &str,
        grade: Option<u8>,
        password: Option<&str>,
    ) -> AppResult<Session> {
        let username = username.trim();

        // the configured admin name is not bound by the student username pattern
        let user = if self.admin.is_admin_name(username) {
            self.login_admin(password)?
        } else {
            if !USERNAME_REGEX.is_match(username) {
                return Err(AppError::ValidationError(
                    "Username may only contain letters, digits, '_', '-' and '.'".to_string(),
                ));
            }
            self.login_student(username, grade).await?
        };

        let session = Session::new(user);
        self.sessions.save(&session).await?;
        Ok(session)
    }

    fn login_admin(&self, password: Option<&str>) -> AppResult<LoggedInUser> {
        match password {
            Some(password) if self.admin.verify(password) => {
                log::info!("Admin logged in");
                Ok(LoggedInUser::admin(&self.admin.username))
            }
            _ => {
                log::warn!("Rejected admin login with incorrect password");
                Err(AppError::Unauthorized("Incorrect admin password".to_string()))
            }
        }
    }

    async fn login_student(&self, username: &str, grade: Option<u8>) -> AppResult<LoggedInUser> {
        let _guard = self.locks.acquire(username).await;

        match self.students.find_by_username(username).await? {
            Some(mut student) => {
                let today = self.clock.today();
                if student.decay_streak(today) {
                    log::info!(
                        "Streak for '{}' reset: last played {:?}, today {}",
                        username,
                        student.last_played_date,
                        today
                    );
                    self.students.update(student).await?;
                }
            }
            None => {
                let grade = grade.ok_or_else(|| {
                    AppError::PreconditionFailed(
                        "A grade is required to create a new student account".to_string(),
                    )
                })?;
                if !is_valid_grade(grade) {
                    return Err(AppError::ValidationError(format!(
                        "Grade must be between 3 and 9, got {}",
                        grade
                    )));
                }

                self.students.create(Student::new(username, grade)).await?;
                log::info!("Created student account '{}' in grade {}", username, grade);
            }
        }

        Ok(LoggedInUser::student(username))
    }

    pub async fn current_user(&self, token: &str) -> AppResult<LoggedInUser> {
        self.sessions
            .find(token)
            .await?
            .map(|session| session.user)
            .ok_or_else(|| AppError::Unauthorized("Session not found or logged out".to_string()))
    }

    pub async fn logout(&self, token: &str) -> AppResult<()> {
        self.sessions.remove(token).await
    }
}
