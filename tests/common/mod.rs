#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use lead_tracker::api;
use lead_tracker::auth::{create_jwt, hash_password};
use lead_tracker::db;
use lead_tracker::domain::{CreateUserInput, RequestTypeInput, Role};
use lead_tracker::infrastructure::AppState;
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

pub struct TestUser {
    pub id: String,
    pub email: String,
    pub token: String,
}

// Helper to create a test app state over an in-memory database
pub async fn setup_test_state() -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db)
}

pub fn app(state: &AppState) -> Router {
    api::api_router(state.clone())
}

// Helper to create a user directly through the repository
pub async fn create_test_user(state: &AppState, email: &str, role: Option<Role>) -> TestUser {
    let user = state
        .user_repo
        .create(CreateUserInput {
            email: email.to_string(),
            password_hash: hash_password("password1").expect("Failed to hash"),
            role,
        })
        .await
        .expect("Failed to create user");
    let token = create_jwt(&user.id, &user.email).expect("Failed to create token");

    TestUser {
        id: user.id,
        email: user.email,
        token,
    }
}

// Helper to create a request type directly through the repository
pub async fn create_request_type(state: &AppState, name: &str) -> i32 {
    state
        .request_type_repo
        .create(RequestTypeInput {
            name: name.to_string(),
            description: None,
            fields: None,
        })
        .await
        .expect("Failed to create request type")
        .id
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let body = body.map(|b| serde_json::to_vec(&b).unwrap());
    send_bytes(app, method, uri, token, body).await
}

// Sends the body as-is, for requests that are not valid JSON
pub async fn send_bytes(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Vec<u8>>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().uri(uri).method(method);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let req = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

pub fn lead_form() -> Value {
    serde_json::json!({
        "lead_request_type": "Fiber",
        "lead_area_type": "Market",
        "dealer_code": "D-1024",
        "state": "California",
        "lead_area_requested": "Venice, California",
        "date_needed_by": "2026-12-01",
        "notes": "Expansion into 90291 for ICL Westside"
    })
}

pub async fn submit_lead_request(app: &Router, user: &TestUser) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/lead-requests",
        Some(&user.token),
        Some(lead_form()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["lead_request"]["id"].as_i64().expect("id in response")
}
