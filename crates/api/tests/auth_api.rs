//! HTTP-level integration tests for login and registration.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, post_raw};
use serde_json::json;

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_login_returns_public_user_fields() {
    let app = common::seeded_app().await;
    let response = post_json(
        app,
        "/api/login",
        json!({"email": "admin@pgmanager.com", "password": "admin123", "role": "admin"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["email"], "admin@pgmanager.com");
    assert_eq!(json["user"]["name"], "Admin User");
    assert_eq!(json["user"]["role"], "admin");
    assert!(json["user"]["id"].is_number());
    assert!(json["user"].get("password").is_none());
    assert!(json["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn tenant_login_succeeds() {
    let app = common::seeded_app().await;
    let response = post_json(
        app,
        "/api/login",
        json!({"email": "john@example.com", "password": "tenant123", "role": "tenant"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["name"], "John Doe");
}

#[tokio::test]
async fn login_with_wrong_role_is_unauthorized() {
    let app = common::seeded_app().await;
    let response = post_json(
        app,
        "/api/login",
        json!({"email": "john@example.com", "password": "tenant123", "role": "admin"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid credentials");
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = common::seeded_app().await;
    let response = post_json(
        app,
        "/api/login",
        json!({"email": "admin@pgmanager.com", "password": "admin124", "role": "admin"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid credentials");
}

#[tokio::test]
async fn login_with_unknown_email_is_unauthorized() {
    let app = common::seeded_app().await;
    let response = post_json(
        app,
        "/api/login",
        json!({"email": "nobody@example.com", "password": "admin123", "role": "admin"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_with_malformed_body_is_bad_request() {
    let app = common::seeded_app().await;
    let response = post_json(app.clone(), "/api/login", json!({"email": "admin@pgmanager.com"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["message"].is_string());

    let response = post_json(
        app.clone(),
        "/api/login",
        json!({"email": "not-an-email", "password": "admin123", "role": "admin"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        app.clone(),
        "/api/login",
        json!({"email": "admin@pgmanager.com", "password": "admin123", "role": "owner"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_raw(app, "/api/login", "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[tokio::test]
async fn register_then_login() {
    let app = common::empty_app().await;
    let response = post_json(
        app.clone(),
        "/api/register",
        json!({
            "email": "priya@example.com",
            "password": "secret99",
            "role": "tenant",
            "name": "Priya Nair",
            "phone": "+91 90000 00000",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["user"]["email"], "priya@example.com");
    assert_eq!(json["user"]["role"], "tenant");
    let id = json["user"]["id"].as_i64().unwrap();

    let response = post_json(
        app,
        "/api/login",
        json!({"email": "priya@example.com", "password": "secret99", "role": "tenant"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["user"]["id"], id);
}

#[tokio::test]
async fn register_duplicate_email_conflicts() {
    let app = common::seeded_app().await;
    let response = post_json(
        app,
        "/api/register",
        json!({
            "email": "john@example.com",
            "password": "another",
            "role": "tenant",
            "name": "John Again",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["message"], "User already exists");
}

#[tokio::test]
async fn register_rejects_invalid_fields() {
    let app = common::empty_app().await;

    let response = post_json(
        app.clone(),
        "/api/register",
        json!({"email": "bad-email", "password": "x", "role": "tenant", "name": "X"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        app.clone(),
        "/api/register",
        json!({"email": "x@example.com", "password": "x", "role": "superuser", "name": "X"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        app,
        "/api/register",
        json!({"email": "x@example.com", "password": "x", "role": "tenant"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
