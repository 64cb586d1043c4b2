//! HTTP-level integration tests for the `/api/tenants` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;

#[tokio::test]
async fn list_tenants_is_joined() {
    let app = common::seeded_app().await;
    let response = get(app, "/api/tenants").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let tenants = json.as_array().unwrap();
    assert_eq!(tenants.len(), 2);

    let john = &tenants[0];
    assert_eq!(john["userId"], john["user"]["id"]);
    assert_eq!(john["user"]["email"], "john@example.com");
    assert_eq!(john["room"]["number"], "101");
    assert_eq!(john["isActive"], true);
    assert_eq!(john["idProof"], "aadhar.jpg");
    assert!(john["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn tenant_by_user_id() {
    let app = common::seeded_app().await;

    // Sarah is the third user created by the seed.
    let response = get(app.clone(), "/api/tenants/user/3").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["name"], "Sarah Wilson");
    assert_eq!(json["room"]["number"], "103");

    // The admin has no tenant record.
    let response = get(app, "/api/tenants/user/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_room_hides_its_tenant() {
    let app = common::seeded_app().await;

    let response = delete(app.clone(), "/api/rooms/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.clone(), "/api/tenants/user/2").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app.clone(), "/api/tenants/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let tenants = body_json(get(app, "/api/tenants").await).await;
    let tenants = tenants.as_array().unwrap();
    assert_eq!(tenants.len(), 1);
    assert_eq!(tenants[0]["user"]["email"], "sarah@example.com");
}

#[tokio::test]
async fn create_tenant_assigns_join_date() {
    let app = common::seeded_app().await;
    let response = post_json(
        app.clone(),
        "/api/tenants",
        json!({"userId": 1, "roomId": 2, "emergencyContact": "+91 90000 11111"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["userId"], 1);
    assert_eq!(created["roomId"], 2);
    assert_eq!(created["isActive"], true);
    assert!(created["joinDate"].is_string());
    assert!(created["leaveDate"].is_null());
    // Bare record, not the joined view.
    assert!(created.get("user").is_none());

    let id = created["id"].as_i64().unwrap();
    let response = get(app, &format!("/api/tenants/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["room"]["number"], "102");
}

#[tokio::test]
async fn create_tenant_with_unknown_references_is_rejected() {
    let app = common::seeded_app().await;

    let response = post_json(app.clone(), "/api/tenants", json!({"userId": 99, "roomId": 1})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(app.clone(), "/api/tenants", json!({"userId": 2, "roomId": 99})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(app.clone(), "/api/tenants", json!({"roomId": 1})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let tenants = body_json(get(app, "/api/tenants").await).await;
    assert_eq!(tenants.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn deactivate_tenant() {
    let app = common::seeded_app().await;
    let response = put_json(
        app.clone(),
        "/api/tenants/2",
        json!({"isActive": false, "leaveDate": "2025-01-31T00:00:00Z"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["isActive"], false);
    assert_eq!(json["emergencyContact"], "+91 98765 43214");
    assert!(json["leaveDate"].is_string());

    let stats = body_json(get(app.clone(), "/api/dashboard/stats").await).await;
    assert_eq!(stats["activeTenants"], 1);

    let response = put_json(app, "/api/tenants/99", json!({"isActive": false})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn returning_tenant_clears_leave_date() {
    let app = common::seeded_app().await;
    let response = put_json(
        app.clone(),
        "/api/tenants/1",
        json!({"isActive": false, "leaveDate": "2025-01-01T00:00:00Z"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["leaveDate"].is_string());

    let response = put_json(
        app,
        "/api/tenants/1",
        json!({"isActive": true, "leaveDate": null}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["isActive"], true);
    assert!(json["leaveDate"].is_null());
    // Keys left out of the body are kept.
    assert_eq!(json["idProof"], "aadhar.jpg");
}
