//! Tests for `AppError` → HTTP response mapping.
//!
//! Most of these call `IntoResponse` directly on `AppError` values; the
//! extractor tests at the end go through the router.

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use pgmanager_api::error::AppError;
use pgmanager_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Room",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Room with id 42 not found");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("rent must be positive".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "rent must be positive");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "invalid field value");
}

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let err = AppError::Core(CoreError::Unauthorized("Invalid credentials".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Invalid credentials");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let err = AppError::Core(CoreError::Conflict("Room number already exists".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["message"], "Room number already exists");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret connection string".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "An internal error occurred");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, _) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn other_database_errors_are_sanitized() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "An internal error occurred");
}

#[tokio::test]
async fn unique_violation_from_store_returns_409() {
    let pool = pgmanager_db::create_pool("sqlite::memory:").await.unwrap();
    pgmanager_db::run_migrations(&pool).await.unwrap();
    let insert = "INSERT INTO rooms (number, room_type, rent, status, amenities, created_at)
                  VALUES ('101', 'single', 2500, 'vacant', '[]', '2024-12-01T00:00:00Z')";
    sqlx::query(insert).execute(&pool).await.unwrap();
    let err = sqlx::query(insert).execute(&pool).await.unwrap_err();

    let (status, json) = error_to_response(AppError::Database(err)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(json["message"].as_str().unwrap().contains("unique"));
}

#[tokio::test]
async fn every_error_body_has_only_a_message() {
    let (_, json) = error_to_response(AppError::BadRequest("x".into())).await;
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 1);
    assert!(obj.contains_key("message"));
}

#[tokio::test]
async fn not_found_variant_returns_404() {
    let (status, json) = error_to_response(AppError::NotFound("Resource not found".into())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Resource not found");
}

#[tokio::test]
async fn non_numeric_id_returns_json_404() {
    for (method, uri) in [
        ("GET", "/api/rooms/abc"),
        ("DELETE", "/api/rooms/abc"),
        ("GET", "/api/tenants/user/abc"),
        ("GET", "/api/payments/tenant/x1"),
    ] {
        let app = common::seeded_app().await;
        let response = match method {
            "GET" => common::get(app, uri).await,
            _ => common::delete(app, uri).await,
        };

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {uri}");
        let content_type = response.headers()["content-type"].to_str().unwrap().to_owned();
        assert!(content_type.starts_with("application/json"), "{method} {uri}");
        let json = common::body_json(response).await;
        assert!(json["message"].is_string(), "{method} {uri}");
    }
}
