use std::sync::Arc;

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState, auth::AuthenticatedUser, errors::AppError,
    models::dto::request::ImageRequest,
};

#[post("/api/images")]
async fn generate_image(
    state: web::Data<Arc<AppState>>,
    request: web::Json<ImageRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let image = state
        .image_service
        .generate_image(&auth.user.username, &request.prompt)
        .await?;
    Ok(HttpResponse::Ok().json(image))
}
