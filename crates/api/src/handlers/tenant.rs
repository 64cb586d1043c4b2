//! Handlers for the `/tenants` resource.
//!
//! Reads go through the join layer, so every tenant returned carries its
//! user and room. Writes return the bare tenant record.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pgmanager_core::error::CoreError;
use pgmanager_core::types::DbId;
use pgmanager_db::joins;
use pgmanager_db::models::tenant::{CreateTenant, Tenant, TenantWithUserAndRoom, UpdateTenant};
use pgmanager_db::repositories::{RoomRepo, TenantRepo, UserRepo};
use pgmanager_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Tenant",
        id,
    })
}

pub(crate) async fn ensure_user_exists(pool: &DbPool, user_id: DbId) -> AppResult<()> {
    if UserRepo::find_by_id(pool, user_id).await?.is_none() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "User {user_id} does not exist"
        ))));
    }
    Ok(())
}

async fn ensure_room_exists(pool: &DbPool, room_id: DbId) -> AppResult<()> {
    if RoomRepo::find_by_id(pool, room_id).await?.is_none() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Room {room_id} does not exist"
        ))));
    }
    Ok(())
}

/// Reject a payment or complaint that names a tenant the store does not hold.
pub(crate) async fn ensure_tenant_exists(pool: &DbPool, tenant_id: DbId) -> AppResult<()> {
    if TenantRepo::find_by_id(pool, tenant_id).await?.is_none() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Tenant {tenant_id} does not exist"
        ))));
    }
    Ok(())
}

/// GET /api/tenants
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TenantWithUserAndRoom>>> {
    let tenants = joins::tenants_with_relations(&state.pool).await?;
    Ok(Json(tenants))
}

/// GET /api/tenants/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<TenantWithUserAndRoom>> {
    let tenant = joins::tenant_with_relations(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(tenant))
}

/// GET /api/tenants/user/{user_id}
///
/// 404 both when the user has no tenant record and when that record's room
/// or user can no longer be resolved.
pub async fn get_by_user_id(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<DbId>,
) -> AppResult<Json<TenantWithUserAndRoom>> {
    let tenant = joins::tenant_by_user_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tenant for user",
            id: user_id,
        }))?;
    Ok(Json(tenant))
}

/// POST /api/tenants
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTenant>,
) -> AppResult<(StatusCode, Json<Tenant>)> {
    ensure_user_exists(&state.pool, input.user_id).await?;
    ensure_room_exists(&state.pool, input.room_id).await?;

    let tenant = TenantRepo::create(&state.pool, &input).await?;

    tracing::info!(
        tenant_id = tenant.id,
        user_id = tenant.user_id,
        room_id = tenant.room_id,
        "Tenant created",
    );
    Ok((StatusCode::CREATED, Json(tenant)))
}

/// PUT /api/tenants/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateTenant>,
) -> AppResult<Json<Tenant>> {
    if let Some(user_id) = input.user_id {
        ensure_user_exists(&state.pool, user_id).await?;
    }
    if let Some(room_id) = input.room_id {
        ensure_room_exists(&state.pool, room_id).await?;
    }

    let tenant = TenantRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(tenant_id = id, is_active = tenant.is_active, "Tenant updated");
    Ok(Json(tenant))
}
