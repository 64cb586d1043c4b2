mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};
use serde_json::json;

#[tokio::test]
async fn seeded_stats() {
    let app = common::seeded_app().await;
    let response = get(app, "/api/dashboard/stats").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({
            "totalRooms": 4,
            "activeTenants": 2,
            "monthlyRevenue": 4500,
            "pendingComplaints": 1,
        })
    );
}

#[tokio::test]
async fn revenue_follows_room_occupancy_not_payments() {
    let app = common::seeded_app().await;

    put_json(app.clone(), "/api/rooms/2", json!({"status": "occupied"})).await;
    post_json(
        app.clone(),
        "/api/payments",
        json!({"tenantId": 1, "amount": 99999, "month": "2025-01", "dueDate": "2025-01-01T00:00:00Z"}),
    )
    .await;

    let json = body_json(get(app, "/api/dashboard/stats").await).await;
    assert_eq!(json["monthlyRevenue"], 7500);
}

#[tokio::test]
async fn empty_store_stats() {
    let app = common::empty_app().await;
    let json = body_json(get(app, "/api/dashboard/stats").await).await;
    assert_eq!(json["totalRooms"], 0);
    assert_eq!(json["monthlyRevenue"], 0);
}
