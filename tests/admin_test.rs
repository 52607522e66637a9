mod common;

use axum::http::StatusCode;
use common::*;
use lead_tracker::domain::Role;
use serde_json::json;

#[tokio::test]
async fn test_request_type_crud() {
    let state = setup_test_state().await;
    let app = app(&state);
    let admin = create_test_user(&state, "admin@example.com", Some(Role::Admin)).await;

    // 1. Name is required
    let (status, body) = send(
        &app,
        "POST",
        "/admin/request-types",
        Some(&admin.token),
        Some(json!({ "name": "   ", "description": "blank" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name is required");

    // 2. Create two
    let (status, fiber) = send(
        &app,
        "POST",
        "/admin/request-types",
        Some(&admin.token),
        Some(json!({ "name": " Fiber ", "description": "Fiber leads", "fields": [{ "name": "zip" }] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(fiber["name"], "Fiber");
    assert_eq!(fiber["fields"][0]["name"], "zip");

    let (_, wireless) = send(
        &app,
        "POST",
        "/admin/request-types",
        Some(&admin.token),
        Some(json!({ "name": "Wireless" })),
    )
    .await;
    assert_eq!(wireless["description"], "");
    assert_eq!(wireless["fields"], json!([]));

    // 3. List is ordered by id
    let (status, list) = send(&app, "GET", "/admin/request-types", Some(&admin.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list[0]["name"], "Fiber");
    assert_eq!(list[1]["name"], "Wireless");

    // 4. Update keeps fields when none are sent
    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/admin/request-types/{}", fiber["id"]),
        Some(&admin.token),
        Some(json!({ "name": "Fiber Plus", "description": "Upgraded" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Fiber Plus");
    assert_eq!(updated["fields"][0]["name"], "zip");

    let (status, _) = send(
        &app,
        "PUT",
        "/admin/request-types/999",
        Some(&admin.token),
        Some(json!({ "name": "Ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // 5. Delete, then delete again
    let uri = format!("/admin/request-types/{}", wireless["id"]);
    let (status, _) = send(&app, "DELETE", &uri, Some(&admin.token), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "DELETE", &uri, Some(&admin.token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(&app, "GET", "/admin/request-types", Some(&admin.token), None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_request_types_are_admin_only() {
    let state = setup_test_state().await;
    let app = app(&state);
    let reviewer = create_test_user(&state, "review@example.com", Some(Role::Sidcorp)).await;

    let (status, _) = send(&app, "GET", "/admin/request-types", Some(&reviewer.token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        "POST",
        "/admin/request-types",
        Some(&reviewer.token),
        Some(json!({ "name": "Sneaky" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_deleted_request_type_resolves_to_unknown() {
    let state = setup_test_state().await;
    let app = app(&state);
    let admin = create_test_user(&state, "admin@example.com", Some(Role::Admin)).await;

    let (_, rt) = send(
        &app,
        "POST",
        "/admin/request-types",
        Some(&admin.token),
        Some(json!({ "name": "Fiber" })),
    )
    .await;

    let mut form = lead_form();
    form["request_type_id"] = rt["id"].clone();
    let (status, created) = send(&app, "POST", "/lead-requests", Some(&admin.token), Some(form)).await;
    assert_eq!(status, StatusCode::CREATED);
    let lead_id = created["lead_request"]["id"].clone();

    let (_, list) = send(&app, "GET", "/lead-requests", Some(&admin.token), None).await;
    assert_eq!(list["lead_requests"][0]["request_type_name"], "Fiber");

    send(
        &app,
        "DELETE",
        &format!("/admin/request-types/{}", rt["id"]),
        Some(&admin.token),
        None,
    )
    .await;

    let (_, detail) = send(
        &app,
        "GET",
        &format!("/lead-requests/{}", lead_id),
        Some(&admin.token),
        None,
    )
    .await;
    assert_eq!(detail["request_type_name"], "Unknown");
    assert_eq!(detail["lead_request"]["request_type_id"], rt["id"]);
}

#[tokio::test]
async fn test_non_admin_cannot_change_roles() {
    let state = setup_test_state().await;
    let app = app(&state);
    let reviewer = create_test_user(&state, "review@example.com", Some(Role::Sidcorp)).await;
    let owner = create_test_user(&state, "owner@example.com", Some(Role::IclOwner)).await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/admin/users/{}/role", owner.id),
        Some(&reviewer.token),
        Some(json!({ "role": "admin" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Access denied.");

    let (status, _) = send(&app, "GET", "/admin/users", Some(&owner.token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_role_assignment() {
    let state = setup_test_state().await;
    let app = app(&state);
    let admin = create_test_user(&state, "admin@example.com", Some(Role::Admin)).await;
    let owner = create_test_user(&state, "owner@example.com", None).await;

    // Listing shows every user with their role
    let (status, users) = send(&app, "GET", "/admin/users", Some(&admin.token), None).await;
    assert_eq!(status, StatusCode::OK);
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("password_hash").is_none()));

    // Unknown role
    let uri = format!("/admin/users/{}/role", owner.id);
    let (status, _) = send(&app, "PUT", &uri, Some(&admin.token), Some(json!({ "role": "owner" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Promote
    let (status, body) = send(&app, "PUT", &uri, Some(&admin.token), Some(json!({ "role": "sidcorp" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "sidcorp");
    assert_eq!(body["email"], owner.email.as_str());

    // Self change is refused
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/admin/users/{}/role", admin.id),
        Some(&admin.token),
        Some(json!({ "role": "icl_owner" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "You cannot change your own role");

    // Unknown user
    let (status, _) = send(
        &app,
        "PUT",
        "/admin/users/does-not-exist/role",
        Some(&admin.token),
        Some(json!({ "role": "sidcorp" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
