use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Admin,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggedInUser {
    pub username: String,
    pub role: UserRole,
}

impl LoggedInUser {
    pub fn student(username: &str) -> Self {
        Self {
            username: username.to_string(),
            role: UserRole::Student,
        }
    }

    pub fn admin(username: &str) -> Self {
        Self {
            username: username.to_string(),
            role: UserRole::Admin,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// A logged-in identity bound to a bearer token. Lives until logout.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Session {
    pub token: String,
    pub user: LoggedInUser,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user: LoggedInUser) -> Self {
        Self {
            token: Uuid::new_v4().to_string(),
            user,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&LoggedInUser::admin("admin")).unwrap();
        assert_eq!(json, r#"{"username":"admin","role":"admin"}"#);

        let user: LoggedInUser =
            serde_json::from_str(r#"{"username":"maya","role":"student"}"#).unwrap();
        assert_eq!(user, LoggedInUser::student("maya"));
    }

    #[test]
    fn sessions_get_distinct_tokens() {
        let a = Session::new(LoggedInUser::student("maya"));
        let b = Session::new(LoggedInUser::student("maya"));
        assert_ne!(a.token, b.token);
        assert!(Uuid::parse_str(&a.token).is_ok());
    }
}
