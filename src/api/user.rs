use axum::{
    Json,
    extract::State,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::api::extract::{ApiJson, ApiPath};
use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::infrastructure::auth::CurrentUser;
use crate::services::admin_service;

#[derive(Deserialize)]
pub struct UpdateRoleRequest {
    #[serde(default)]
    role: String,
}

#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses(
        (status = 200, description = "All users with their roles"),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<impl IntoResponse, DomainError> {
    let users = admin_service::list_users(&state, &user).await?;
    Ok(Json(users))
}

#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/role",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Role updated"),
        (status = 400, description = "Unknown role or own account"),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn update_user_role(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<String>,
    ApiJson(payload): ApiJson<UpdateRoleRequest>,
) -> Result<impl IntoResponse, DomainError> {
    let updated = admin_service::update_user_role(&state, &user, &id, &payload.role).await?;
    Ok(Json(updated))
}
