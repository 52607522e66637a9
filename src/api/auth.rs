use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;

use crate::api::extract::ApiJson;
use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::infrastructure::auth::CurrentUser;
use crate::services::auth_service;

#[derive(Deserialize)]
pub struct Credentials {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    responses(
        (status = 201, description = "Account created, session token returned"),
        (status = 400, description = "Invalid email or password"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<Credentials>,
) -> Result<impl IntoResponse, DomainError> {
    let session = auth_service::signup(&state, &payload.email, &payload.password).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    responses(
        (status = 200, description = "Session token returned"),
        (status = 401, description = "Invalid login credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<Credentials>,
) -> Result<impl IntoResponse, DomainError> {
    let session = auth_service::login(&state, &payload.email, &payload.password).await?;
    Ok(Json(session))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user with role"),
        (status = 401, description = "Not logged in")
    )
)]
pub async fn me(CurrentUser(user): CurrentUser) -> impl IntoResponse {
    Json(user)
}
