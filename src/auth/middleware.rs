use std::sync::Arc;

use actix_web::{dev::Payload, http::header::AUTHORIZATION, web, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;

use crate::{
    app_state::AppState, errors::AppError, middleware::request_id, models::domain::LoggedInUser,
};

/// Extractor resolving the `Authorization: Bearer <token>` header to a live session.
pub struct AuthenticatedUser {
    pub user: LoggedInUser,
    pub token: String,
}

fn bearer_token(req: &HttpRequest) -> Result<String, AppError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    header
        .strip_prefix("Bearer ")
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization header format".to_string()))
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = bearer_token(req);
        let state = req.app_data::<web::Data<Arc<AppState>>>().cloned();
        let request_id = request_id(req).unwrap_or_else(|| "-".to_string());

        Box::pin(async move {
            let state = state
                .ok_or_else(|| AppError::InternalError("Application state not configured".to_string()))?;

            let resolved = match token {
                Ok(token) => state
                    .identity_service
                    .current_user(&token)
                    .await
                    .map(|user| AuthenticatedUser { user, token }),
                Err(e) => Err(e),
            };
            if let Err(e) = &resolved {
                log::warn!("Rejected request [{}]: {}", request_id, e);
            }
            resolved
        })
    }
}
