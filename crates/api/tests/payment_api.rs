//! HTTP-level integration tests for the `/api/payments` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;

#[tokio::test]
async fn list_payments_carries_tenant_and_user() {
    let app = common::seeded_app().await;
    let response = get(app, "/api/payments").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let payments = json.as_array().unwrap();
    assert_eq!(payments.len(), 3);
    assert_eq!(payments[0]["status"], "paid");
    assert_eq!(payments[0]["paymentMethod"], "upi");
    assert_eq!(payments[0]["tenant"]["user"]["name"], "John Doe");
    assert_eq!(payments[1]["tenant"]["user"]["name"], "Sarah Wilson");
    assert!(payments[1]["paidAt"].is_null());
}

#[tokio::test]
async fn payments_for_one_tenant() {
    let app = common::seeded_app().await;
    let json = body_json(get(app.clone(), "/api/payments/tenant/1").await).await;
    let months: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["month"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(months, vec!["2024-12", "2024-11"]);

    let json = body_json(get(app, "/api/payments/tenant/42").await).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn record_and_settle_payment() {
    let app = common::seeded_app().await;
    let response = post_json(
        app.clone(),
        "/api/payments",
        json!({"tenantId": 2, "amount": 2000, "month": "2025-01", "dueDate": "2025-01-01T00:00:00Z"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["status"], "pending");
    let id = created["id"].as_i64().unwrap();

    let response = put_json(
        app,
        &format!("/api/payments/{id}"),
        json!({
            "status": "paid",
            "paidAt": "2025-01-03T10:00:00Z",
            "paymentMethod": "cash",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "paid");
    assert_eq!(json["paymentMethod"], "cash");
    assert_eq!(json["amount"], 2000);
    assert_eq!(json["month"], "2025-01");
}

#[tokio::test]
async fn invalid_payments_are_rejected() {
    let app = common::seeded_app().await;
    let due = "2025-01-01T00:00:00Z";
    for body in [
        json!({"tenantId": 1, "amount": 2500, "month": "2025-13", "dueDate": due}),
        json!({"tenantId": 1, "amount": -5, "month": "2025-01", "dueDate": due}),
        json!({"tenantId": 1, "amount": 2500, "month": "2025-01", "dueDate": due, "status": "late"}),
        json!({"tenantId": 1, "amount": 2500, "month": "2025-01", "dueDate": due, "paymentMethod": "cheque"}),
        json!({"tenantId": 77, "amount": 2500, "month": "2025-01", "dueDate": due}),
        json!({"tenantId": 1, "amount": 2500, "month": "2025-01"}),
    ] {
        let response = post_json(app.clone(), "/api/payments", body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
    }

    let response = put_json(app.clone(), "/api/payments/1", json!({"status": "refunded"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json(app, "/api/payments/99", json!({"status": "paid"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn room_deletion_does_not_hide_payments() {
    let app = common::seeded_app().await;

    // Payment joins resolve tenant and user only.
    delete(app.clone(), "/api/rooms/1").await;

    let payments = body_json(get(app, "/api/payments").await).await;
    assert_eq!(payments.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn reopening_a_payment_clears_settlement_fields() {
    let app = common::seeded_app().await;
    let response = put_json(
        app,
        "/api/payments/1",
        json!({"status": "pending", "paidAt": null, "paymentMethod": null, "transactionId": null}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "pending");
    assert!(json["paidAt"].is_null());
    assert!(json["paymentMethod"].is_null());
    assert!(json["transactionId"].is_null());
    assert!(json["dueDate"].is_string());
}
