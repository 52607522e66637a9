mod common;

use axum::http::StatusCode;
use common::*;
use lead_tracker::domain::Role;
use serde_json::json;

#[tokio::test]
async fn test_signup_login_flow() {
    let state = setup_test_state().await;
    let app = app(&state);

    // 1. Signup creates an owner account and returns a session
    let (status, body) = send(
        &app,
        "POST",
        "/auth/signup",
        None,
        Some(json!({ "email": "New.User@Example.com", "password": "s3cret!" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["email"], "new.user@example.com");
    assert_eq!(body["user"]["role"], "icl_owner");
    let token = body["token"].as_str().unwrap().to_string();

    // 2. The token resolves to the current user
    let (status, me) = send(&app, "GET", "/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "new.user@example.com");

    // 3. Duplicate signup
    let (status, body) = send(
        &app,
        "POST",
        "/auth/signup",
        None,
        Some(json!({ "email": "new.user@example.com", "password": "another1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "User already registered");

    // 4. Login with the right and wrong password
    let (status, body) = send(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "email": "new.user@example.com", "password": "s3cret!" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().is_some());

    let (status, body) = send(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "email": "new.user@example.com", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid login credentials");

    // 5. Unknown email gets the same answer
    let (status, body) = send(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "email": "nobody@example.com", "password": "whatever" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid login credentials");
}

#[tokio::test]
async fn test_signup_validation() {
    let state = setup_test_state().await;
    let app = app(&state);

    let (status, _) = send(
        &app,
        "POST",
        "/auth/signup",
        None,
        Some(json!({ "email": "not-an-email", "password": "s3cret!" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        "POST",
        "/auth/signup",
        None,
        Some(json!({ "email": "short@example.com", "password": "abc" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("at least 6"));
}

#[tokio::test]
async fn test_authenticated_routes_need_a_valid_token() {
    let state = setup_test_state().await;
    let app = app(&state);

    let (status, body) = send(&app, "GET", "/lead-requests", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Missing Authorization header");

    let (status, _) = send(&app, "GET", "/lead-requests", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_missing_user_is_rejected() {
    let state = setup_test_state().await;
    let app = app(&state);

    let token = lead_tracker::auth::create_jwt("no-such-id", "ghost@example.com").unwrap();
    let (status, _) = send(&app, "GET", "/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_role_change_applies_to_existing_token() {
    let state = setup_test_state().await;
    let app = app(&state);

    let admin = create_test_user(&state, "admin@example.com", Some(Role::Admin)).await;
    let owner = create_test_user(&state, "owner@example.com", Some(Role::IclOwner)).await;

    let (status, _) = send(&app, "GET", "/admin/users", Some(&owner.token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/admin/users/{}/role", owner.id),
        Some(&admin.token),
        Some(json!({ "role": "admin" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Same token, new role
    let (status, _) = send(&app, "GET", "/admin/users", Some(&owner.token), None).await;
    assert_eq!(status, StatusCode::OK);
}
