//! Handlers for the `/rooms` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pgmanager_core::error::CoreError;
use pgmanager_core::room::{validate_number, validate_rent, validate_status, validate_type};
use pgmanager_core::types::DbId;
use pgmanager_db::models::room::{CreateRoom, Room, UpdateRoom};
use pgmanager_db::repositories::RoomRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Room", id })
}

fn duplicate_number() -> AppError {
    AppError::Core(CoreError::Conflict("Room number already exists".into()))
}

/// GET /api/rooms
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Room>>> {
    let rooms = RoomRepo::list(&state.pool).await?;
    Ok(Json(rooms))
}

/// GET /api/rooms/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Room>> {
    let room = RoomRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(room))
}

/// POST /api/rooms
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateRoom>,
) -> AppResult<(StatusCode, Json<Room>)> {
    validate_number(&input.number)?;
    validate_type(&input.room_type)?;
    validate_rent(input.rent)?;
    if let Some(status) = &input.status {
        validate_status(status)?;
    }

    if RoomRepo::find_by_number(&state.pool, &input.number)
        .await?
        .is_some()
    {
        return Err(duplicate_number());
    }

    let room = RoomRepo::create(&state.pool, &input).await?;

    tracing::info!(room_id = room.id, number = %room.number, "Room created");
    Ok((StatusCode::CREATED, Json(room)))
}

/// PUT /api/rooms/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateRoom>,
) -> AppResult<Json<Room>> {
    if RoomRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found(id));
    }
    if let Some(number) = &input.number {
        validate_number(number)?;
        let taken = RoomRepo::find_by_number(&state.pool, number)
            .await?
            .is_some_and(|other| other.id != id);
        if taken {
            return Err(duplicate_number());
        }
    }
    if let Some(room_type) = &input.room_type {
        validate_type(room_type)?;
    }
    if let Some(rent) = input.rent {
        validate_rent(rent)?;
    }
    if let Some(status) = &input.status {
        validate_status(status)?;
    }

    let room = RoomRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(room_id = id, status = %room.status, "Room updated");
    Ok(Json(room))
}

/// DELETE /api/rooms/{id}
///
/// Tenants assigned to the room are not touched; they drop out of joined
/// tenant listings until reassigned.
pub async fn delete(State(state): State<AppState>, AppPath(id): AppPath<DbId>) -> AppResult<StatusCode> {
    if RoomRepo::delete(&state.pool, id).await? {
        tracing::info!(room_id = id, "Room deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
