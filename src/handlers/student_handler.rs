use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::{require_owner, require_owner_or_admin, AuthenticatedUser},
    errors::AppError,
    models::dto::request::SubmitRoundRequest,
};

#[get("/api/students/{username}")]
async fn get_dashboard(
    state: web::Data<Arc<AppState>>,
    username: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_owner_or_admin(&auth.user, &username)?;

    let dashboard = state.progress_service.dashboard(&username).await?;
    Ok(HttpResponse::Ok().json(dashboard))
}

#[post("/api/students/{username}/rounds")]
async fn start_round(
    state: web::Data<Arc<AppState>>,
    username: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_owner(&auth.user, &username)?;

    let round = state.game_service.start_round(&username).await?;
    Ok(HttpResponse::Created().json(round))
}

#[post("/api/students/{username}/rounds/submit")]
async fn submit_round(
    state: web::Data<Arc<AppState>>,
    username: web::Path<String>,
    request: web::Json<SubmitRoundRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_owner(&auth.user, &username)?;
    request.validate()?;

    let result = state
        .game_service
        .submit_round(&username, &request.answers)
        .await?;
    Ok(HttpResponse::Ok().json(result))
}
