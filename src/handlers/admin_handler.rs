use std::sync::Arc;

use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_admin, AuthenticatedUser},
    errors::AppError,
    models::dto::request::RosterQuery,
};

#[get("/api/admin/students")]
async fn list_students(
    state: web::Data<Arc<AppState>>,
    query: web::Query<RosterQuery>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.user)?;

    let query = query.into_inner();
    let students = state
        .roster_service
        .list_students(query.search.as_deref(), query.sort_by)
        .await?;
    Ok(HttpResponse::Ok().json(students))
}
