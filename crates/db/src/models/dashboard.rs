//! Dashboard aggregate types.

use serde::Serialize;
use sqlx::FromRow;

/// Headline numbers for the admin overview.
///
/// `monthly_revenue` is the rent of every occupied room, not the sum of
/// recorded payments.
#[derive(Debug, Clone, Copy, FromRow, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_rooms: i64,
    pub active_tenants: i64,
    pub monthly_revenue: i64,
    pub pending_complaints: i64,
}
