//! Complaint entity model, DTOs, and joined view.

use pgmanager_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::tenant::TenantWithUser;

/// A complaint row from the `complaints` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: DbId,
    pub tenant_id: DbId,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub category: Option<String>,
    pub resolved_at: Option<Timestamp>,
    pub admin_notes: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for filing a new complaint.
///
/// There is no `resolved_at` here: a new complaint is never resolved.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComplaint {
    pub tenant_id: DbId,
    pub title: String,
    pub description: String,
    /// Defaults to `medium` if omitted.
    pub priority: Option<String>,
    /// Defaults to `open` if omitted.
    pub status: Option<String>,
    pub category: Option<String>,
    pub admin_notes: Option<String>,
}

/// DTO for updating an existing complaint. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComplaint {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub resolved_at: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub admin_notes: Option<Option<String>>,
}

/// A complaint with its tenant (and the tenant's user) attached.
#[derive(Debug, Clone, Serialize)]
pub struct ComplaintWithTenant {
    #[serde(flatten)]
    pub complaint: Complaint,
    pub tenant: TenantWithUser,
}
