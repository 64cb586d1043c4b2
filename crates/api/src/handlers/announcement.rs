//! Handlers for the `/announcements` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pgmanager_core::announcement::{validate_audience, validate_priority};
use pgmanager_core::error::CoreError;
use pgmanager_core::types::DbId;
use pgmanager_core::validation::validate_not_blank;
use pgmanager_db::models::announcement::{
    Announcement, CreateAnnouncement, UpdateAnnouncement,
};
use pgmanager_db::repositories::AnnouncementRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::tenant::ensure_user_exists;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Announcement",
        id,
    })
}

/// GET /api/announcements
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Announcement>>> {
    let announcements = AnnouncementRepo::list(&state.pool).await?;
    Ok(Json(announcements))
}

/// GET /api/announcements/active
pub async fn list_active(State(state): State<AppState>) -> AppResult<Json<Vec<Announcement>>> {
    let announcements = AnnouncementRepo::list_active(&state.pool).await?;
    Ok(Json(announcements))
}

/// POST /api/announcements
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateAnnouncement>,
) -> AppResult<(StatusCode, Json<Announcement>)> {
    validate_not_blank("title", &input.title)?;
    validate_not_blank("content", &input.content)?;
    if let Some(priority) = &input.priority {
        validate_priority(priority)?;
    }
    if let Some(audience) = &input.target_audience {
        validate_audience(audience)?;
    }
    if let Some(user_id) = input.created_by {
        ensure_user_exists(&state.pool, user_id).await?;
    }

    let announcement = AnnouncementRepo::create(&state.pool, &input).await?;

    tracing::info!(
        announcement_id = announcement.id,
        priority = %announcement.priority,
        "Announcement published",
    );
    Ok((StatusCode::CREATED, Json(announcement)))
}

/// PUT /api/announcements/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateAnnouncement>,
) -> AppResult<Json<Announcement>> {
    if let Some(title) = &input.title {
        validate_not_blank("title", title)?;
    }
    if let Some(content) = &input.content {
        validate_not_blank("content", content)?;
    }
    if let Some(priority) = &input.priority {
        validate_priority(priority)?;
    }
    if let Some(audience) = &input.target_audience {
        validate_audience(audience)?;
    }
    if let Some(Some(user_id)) = input.created_by {
        ensure_user_exists(&state.pool, user_id).await?;
    }

    let announcement = AnnouncementRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        announcement_id = id,
        is_active = announcement.is_active,
        "Announcement updated",
    );
    Ok(Json(announcement))
}

/// DELETE /api/announcements/{id}
pub async fn delete(State(state): State<AppState>, AppPath(id): AppPath<DbId>) -> AppResult<StatusCode> {
    if AnnouncementRepo::delete(&state.pool, id).await? {
        tracing::info!(announcement_id = id, "Announcement deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
