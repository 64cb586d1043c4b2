//! Handlers for the admin dashboard.

use axum::extract::State;
use axum::Json;
use pgmanager_db::models::dashboard::DashboardStats;
use pgmanager_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/dashboard/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let stats = DashboardRepo::stats(&state.pool).await?;
    Ok(Json(stats))
}
