//! Room entity model and DTOs.

use pgmanager_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A room row from the `rooms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: DbId,
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub rent: i64,
    pub status: String,
    pub amenities: Json<Vec<String>>,
    pub created_at: Timestamp,
}

/// DTO for creating a new room.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoom {
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub rent: i64,
    /// Defaults to `vacant` if omitted.
    pub status: Option<String>,
    /// `null` or omitted means no amenities.
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub amenities: Vec<String>,
}

/// DTO for updating an existing room. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoom {
    pub number: Option<String>,
    #[serde(rename = "type")]
    pub room_type: Option<String>,
    pub rent: Option<i64>,
    pub status: Option<String>,
    /// `null` replaces the list with an empty one.
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub amenities: Option<Option<Vec<String>>>,
}
