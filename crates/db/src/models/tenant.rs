//! Tenant entity model, DTOs, and joined views.

use pgmanager_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::room::Room;
use crate::models::user::UserResponse;

/// A tenant row from the `tenants` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: DbId,
    pub user_id: DbId,
    pub room_id: DbId,
    pub join_date: Timestamp,
    pub leave_date: Option<Timestamp>,
    pub emergency_contact: Option<String>,
    pub id_proof: Option<String>,
    pub is_active: bool,
}

/// DTO for creating a new tenant. `joinDate` is assigned by the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenant {
    pub user_id: DbId,
    pub room_id: DbId,
    pub leave_date: Option<Timestamp>,
    pub emergency_contact: Option<String>,
    pub id_proof: Option<String>,
    /// Defaults to `true` if omitted.
    pub is_active: Option<bool>,
}

/// DTO for updating an existing tenant. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTenant {
    pub user_id: Option<DbId>,
    pub room_id: Option<DbId>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub leave_date: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub emergency_contact: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub id_proof: Option<Option<String>>,
    pub is_active: Option<bool>,
}

/// A tenant with its user account attached.
#[derive(Debug, Clone, Serialize)]
pub struct TenantWithUser {
    #[serde(flatten)]
    pub tenant: Tenant,
    pub user: UserResponse,
}

/// A tenant with both its user account and its room attached.
#[derive(Debug, Clone, Serialize)]
pub struct TenantWithUserAndRoom {
    #[serde(flatten)]
    pub tenant: Tenant,
    pub user: UserResponse,
    pub room: Room,
}
