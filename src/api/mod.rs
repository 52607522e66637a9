pub mod auth;
pub mod error;
pub mod extract;
pub mod health;
pub mod lead_request;
pub mod request_type;
pub mod user;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Auth
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        // Lead requests
        .route(
            "/lead-requests",
            get(lead_request::list_lead_requests).post(lead_request::create_lead_request),
        )
        .route("/lead-requests/:id", get(lead_request::get_lead_request))
        .route("/lead-requests/:id/status", put(lead_request::update_status))
        .route("/form-options", get(lead_request::form_options))
        // Admin: request types
        .route(
            "/admin/request-types",
            get(request_type::list_request_types).post(request_type::create_request_type),
        )
        .route(
            "/admin/request-types/:id",
            put(request_type::update_request_type).delete(request_type::delete_request_type),
        )
        // Admin: users
        .route("/admin/users", get(user::list_users))
        .route("/admin/users/:id/role", put(user::update_user_role))
        .with_state(state)
}
