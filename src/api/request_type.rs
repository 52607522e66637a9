use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::api::extract::{ApiJson, ApiPath};
use crate::domain::{DomainError, RequestTypeInput};
use crate::infrastructure::AppState;
use crate::infrastructure::auth::CurrentUser;
use crate::services::admin_service;

#[utoipa::path(
    get,
    path = "/api/admin/request-types",
    responses(
        (status = 200, description = "All request types"),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn list_request_types(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<impl IntoResponse, DomainError> {
    let types = admin_service::list_request_types(&state, &user).await?;
    Ok(Json(types))
}

#[utoipa::path(
    post,
    path = "/api/admin/request-types",
    responses(
        (status = 201, description = "Request type created"),
        (status = 400, description = "Missing name or malformed fields"),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn create_request_type(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiJson(payload): ApiJson<RequestTypeInput>,
) -> Result<impl IntoResponse, DomainError> {
    let created = admin_service::create_request_type(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/admin/request-types/{id}",
    params(("id" = i32, Path, description = "Request type id")),
    responses(
        (status = 200, description = "Request type updated"),
        (status = 404, description = "Request type not found")
    )
)]
pub async fn update_request_type(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<RequestTypeInput>,
) -> Result<impl IntoResponse, DomainError> {
    let updated = admin_service::update_request_type(&state, &user, id, payload).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/admin/request-types/{id}",
    params(("id" = i32, Path, description = "Request type id")),
    responses(
        (status = 200, description = "Request type deleted"),
        (status = 404, description = "Request type not found")
    )
)]
pub async fn delete_request_type(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, DomainError> {
    admin_service::delete_request_type(&state, &user, id).await?;
    Ok(Json(json!({ "message": "Request type deleted" })))
}
