use crate::{
    errors::{AppError, AppResult},
    models::domain::LoggedInUser,
};

pub fn require_admin(user: &LoggedInUser) -> AppResult<()> {
    if !user.is_admin() {
        return Err(AppError::Unauthorized(
            "Only admins can perform this action".to_string(),
        ));
    }
    Ok(())
}

pub fn require_owner(user: &LoggedInUser, username: &str) -> AppResult<()> {
    if user.is_admin() || user.username != username {
        return Err(AppError::Unauthorized(
            "Only the student can play their own rounds".to_string(),
        ));
    }
    Ok(())
}

pub fn require_owner_or_admin(user: &LoggedInUser, username: &str) -> AppResult<()> {
    if !user.is_admin() && user.username != username {
        return Err(AppError::Unauthorized(
            "You can only access your own progress".to_string(),
        ));
    }
    Ok(())
}
