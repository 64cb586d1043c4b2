//! Aggregate queries backing the admin dashboard.

use pgmanager_core::complaint::STATUS_OPEN;
use pgmanager_core::room::STATUS_OCCUPIED;

use crate::models::dashboard::DashboardStats;
use crate::DbPool;

/// Read-only aggregation over the entity tables.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Recompute the dashboard headline numbers with full scans.
    ///
    /// Revenue is the summed rent of occupied rooms; payment records are not
    /// consulted.
    pub async fn stats(pool: &DbPool) -> Result<DashboardStats, sqlx::Error> {
        sqlx::query_as::<_, DashboardStats>(
            "SELECT
                (SELECT COUNT(*) FROM rooms) AS total_rooms,
                (SELECT COUNT(*) FROM tenants WHERE is_active = 1) AS active_tenants,
                (SELECT COALESCE(SUM(rent), 0) FROM rooms WHERE status = ?1) AS monthly_revenue,
                (SELECT COUNT(*) FROM complaints WHERE status = ?2) AS pending_complaints",
        )
        .bind(STATUS_OCCUPIED)
        .bind(STATUS_OPEN)
        .fetch_one(pool)
        .await
    }
}
