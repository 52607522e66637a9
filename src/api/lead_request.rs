use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::api::extract::{ApiJson, ApiPath};
use crate::domain::{DomainError, NewLeadRequestForm};
use crate::infrastructure::AppState;
use crate::infrastructure::auth::CurrentUser;
use crate::services::lead_request_service;

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    status: String,
}

#[utoipa::path(
    get,
    path = "/api/lead-requests",
    responses(
        (status = 200, description = "Lead requests visible to the caller, newest first"),
        (status = 401, description = "Not logged in")
    )
)]
pub async fn list_lead_requests(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<impl IntoResponse, DomainError> {
    let requests = lead_request_service::list_lead_requests(&state, &user).await?;
    Ok(Json(json!({
        "total": requests.len(),
        "lead_requests": requests,
    })))
}

#[utoipa::path(
    post,
    path = "/api/lead-requests",
    responses(
        (status = 201, description = "Lead request submitted as draft"),
        (status = 400, description = "Missing or invalid fields")
    )
)]
pub async fn create_lead_request(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiJson(form): ApiJson<NewLeadRequestForm>,
) -> Result<impl IntoResponse, DomainError> {
    let created = lead_request_service::create_lead_request(&state, &user, form).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Lead request submitted!",
            "lead_request": created,
        })),
    ))
}

#[utoipa::path(
    get,
    path = "/api/lead-requests/{id}",
    params(("id" = i32, Path, description = "Lead request id")),
    responses(
        (status = 200, description = "Lead request with status history"),
        (status = 403, description = "Access denied"),
        (status = 404, description = "Request not found")
    )
)]
pub async fn get_lead_request(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, DomainError> {
    let detail = lead_request_service::get_lead_request_detail(&state, &user, id).await?;
    Ok(Json(detail))
}

#[utoipa::path(
    put,
    path = "/api/lead-requests/{id}/status",
    params(("id" = i32, Path, description = "Lead request id")),
    responses(
        (status = 200, description = "Status updated and history appended"),
        (status = 400, description = "Unknown or unchanged status"),
        (status = 403, description = "Caller is not a reviewer"),
        (status = 404, description = "Request not found")
    )
)]
pub async fn update_status(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateStatusRequest>,
) -> Result<impl IntoResponse, DomainError> {
    let change = lead_request_service::update_status(&state, &user, id, &payload.status).await?;
    Ok(Json(json!({
        "message": "Status updated!",
        "lead_request": change.lead_request,
        "history_entry": change.history_entry,
    })))
}

#[utoipa::path(
    get,
    path = "/api/form-options",
    responses(
        (status = 200, description = "Request types, lead area types and states for the new request form")
    )
)]
pub async fn form_options(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> Result<impl IntoResponse, DomainError> {
    Ok(Json(lead_request_service::form_options(&state).await?))
}
