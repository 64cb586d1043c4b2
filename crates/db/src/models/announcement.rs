//! Announcement entity model and DTOs.

use pgmanager_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An announcement row from the `announcements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub priority: String,
    pub target_audience: String,
    pub is_active: bool,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for creating a new announcement.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncement {
    pub title: String,
    pub content: String,
    /// Defaults to `normal` if omitted.
    pub priority: Option<String>,
    /// Defaults to `all` if omitted.
    pub target_audience: Option<String>,
    /// Defaults to `true` if omitted.
    pub is_active: Option<bool>,
    pub created_by: Option<DbId>,
}

/// DTO for updating an existing announcement. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnnouncement {
    pub title: Option<String>,
    pub content: Option<String>,
    pub priority: Option<String>,
    pub target_audience: Option<String>,
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub created_by: Option<Option<DbId>>,
}
