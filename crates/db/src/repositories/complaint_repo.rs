//! Repository for the `complaints` table.

use chrono::Utc;
use pgmanager_core::complaint::{DEFAULT_PRIORITY, DEFAULT_STATUS};
use pgmanager_core::types::DbId;

use crate::models::complaint::{Complaint, CreateComplaint, UpdateComplaint};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, title, description, priority, status, category, \
                       resolved_at, admin_notes, created_at";

/// Provides CRUD operations for complaints. Complaints are closed, never deleted.
pub struct ComplaintRepo;

impl ComplaintRepo {
    /// Insert a new complaint, returning the created row.
    ///
    /// `priority` defaults to `medium` and `status` to `open`; `resolved_at`
    /// always starts empty.
    pub async fn create(pool: &DbPool, input: &CreateComplaint) -> Result<Complaint, sqlx::Error> {
        let query = format!(
            "INSERT INTO complaints
                (tenant_id, title, description, priority, status, category,
                 resolved_at, admin_notes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, NULL, ?7, ?8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(input.tenant_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.priority.as_deref().unwrap_or(DEFAULT_PRIORITY))
            .bind(input.status.as_deref().unwrap_or(DEFAULT_STATUS))
            .bind(&input.category)
            .bind(&input.admin_notes)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a complaint by its internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Complaint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM complaints WHERE id = ?1");
        sqlx::query_as::<_, Complaint>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all complaints in creation order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Complaint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM complaints ORDER BY id");
        sqlx::query_as::<_, Complaint>(&query).fetch_all(pool).await
    }

    /// List every complaint filed by a tenant.
    pub async fn list_by_tenant(
        pool: &DbPool,
        tenant_id: DbId,
    ) -> Result<Vec<Complaint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM complaints WHERE tenant_id = ?1 ORDER BY id");
        sqlx::query_as::<_, Complaint>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// Update a complaint. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateComplaint,
    ) -> Result<Option<Complaint>, sqlx::Error> {
        let query = format!(
            "UPDATE complaints SET
                title = COALESCE(?2, title),
                description = COALESCE(?3, description),
                priority = COALESCE(?4, priority),
                status = COALESCE(?5, status),
                category = CASE WHEN ?6 THEN ?7 ELSE category END,
                resolved_at = CASE WHEN ?8 THEN ?9 ELSE resolved_at END,
                admin_notes = CASE WHEN ?10 THEN ?11 ELSE admin_notes END
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.priority)
            .bind(&input.status)
            .bind(input.category.is_some())
            .bind(input.category.as_ref().and_then(|v| v.as_deref()))
            .bind(input.resolved_at.is_some())
            .bind(input.resolved_at.flatten())
            .bind(input.admin_notes.is_some())
            .bind(input.admin_notes.as_ref().and_then(|v| v.as_deref()))
            .fetch_optional(pool)
            .await
    }
}
