//! Handlers for the `/complaints` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pgmanager_core::complaint::{validate_category, validate_priority, validate_status};
use pgmanager_core::error::CoreError;
use pgmanager_core::types::DbId;
use pgmanager_core::validation::validate_not_blank;
use pgmanager_db::joins;
use pgmanager_db::models::complaint::{
    Complaint, ComplaintWithTenant, CreateComplaint, UpdateComplaint,
};
use pgmanager_db::repositories::ComplaintRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::tenant::ensure_tenant_exists;
use crate::state::AppState;

/// GET /api/complaints
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ComplaintWithTenant>>> {
    let complaints = joins::complaints_with_tenant(&state.pool).await?;
    Ok(Json(complaints))
}

/// GET /api/complaints/tenant/{tenant_id}
pub async fn list_by_tenant(
    State(state): State<AppState>,
    AppPath(tenant_id): AppPath<DbId>,
) -> AppResult<Json<Vec<Complaint>>> {
    let complaints = ComplaintRepo::list_by_tenant(&state.pool, tenant_id).await?;
    Ok(Json(complaints))
}

/// POST /api/complaints
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateComplaint>,
) -> AppResult<(StatusCode, Json<Complaint>)> {
    validate_not_blank("title", &input.title)?;
    validate_not_blank("description", &input.description)?;
    if let Some(priority) = &input.priority {
        validate_priority(priority)?;
    }
    if let Some(status) = &input.status {
        validate_status(status)?;
    }
    if let Some(category) = &input.category {
        validate_category(category)?;
    }
    ensure_tenant_exists(&state.pool, input.tenant_id).await?;

    let complaint = ComplaintRepo::create(&state.pool, &input).await?;

    tracing::info!(
        complaint_id = complaint.id,
        tenant_id = complaint.tenant_id,
        priority = %complaint.priority,
        "Complaint filed",
    );
    Ok((StatusCode::CREATED, Json(complaint)))
}

/// PUT /api/complaints/{id}
///
/// `resolvedAt` is stored as given; it is not stamped automatically when the
/// status moves to `resolved`.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateComplaint>,
) -> AppResult<Json<Complaint>> {
    if let Some(title) = &input.title {
        validate_not_blank("title", title)?;
    }
    if let Some(description) = &input.description {
        validate_not_blank("description", description)?;
    }
    if let Some(priority) = &input.priority {
        validate_priority(priority)?;
    }
    if let Some(status) = &input.status {
        validate_status(status)?;
    }
    if let Some(Some(category)) = &input.category {
        validate_category(category)?;
    }

    let complaint = ComplaintRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Complaint",
            id,
        }))?;

    tracing::info!(complaint_id = id, status = %complaint.status, "Complaint updated");
    Ok(Json(complaint))
}
