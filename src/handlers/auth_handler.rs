use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{
        request::LoginRequest,
        response::{CurrentUserResponse, LoginResponse, MessageResponse},
    },
};

#[post("/api/auth/login")]
async fn login(
    state: web::Data<Arc<AppState>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let session = state
        .identity_service
        .login(&request.username, request.grade, request.password.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(LoginResponse::from(session)))
}

#[post("/api/auth/logout")]
async fn logout(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state.identity_service.logout(&auth.token).await?;
    log::info!("'{}' logged out", auth.user.username);

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Logged out".to_string(),
    }))
}

#[get("/api/auth/me")]
async fn current_user(auth: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(CurrentUserResponse { user: auth.user }))
}
