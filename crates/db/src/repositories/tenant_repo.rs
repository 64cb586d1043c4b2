//! Repository for the `tenants` table.

use chrono::Utc;
use pgmanager_core::types::{DbId, Timestamp};

use crate::models::tenant::{CreateTenant, Tenant, UpdateTenant};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, room_id, join_date, leave_date, emergency_contact, id_proof, is_active";

/// Provides CRUD operations for tenants. Tenants are deactivated, never deleted.
pub struct TenantRepo;

impl TenantRepo {
    /// Insert a new tenant, stamping `join_date` with the current time.
    ///
    /// If `is_active` is `None` in the input, defaults to `true`.
    pub async fn create(pool: &DbPool, input: &CreateTenant) -> Result<Tenant, sqlx::Error> {
        let query = format!(
            "INSERT INTO tenants
                (user_id, room_id, join_date, leave_date, emergency_contact, id_proof, is_active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tenant>(&query)
            .bind(input.user_id)
            .bind(input.room_id)
            .bind(Utc::now())
            .bind(input.leave_date)
            .bind(&input.emergency_contact)
            .bind(&input.id_proof)
            .bind(input.is_active.unwrap_or(true))
            .fetch_one(pool)
            .await
    }

    /// Find a tenant by its internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Tenant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tenants WHERE id = ?1");
        sqlx::query_as::<_, Tenant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the first tenant record belonging to a user account.
    pub async fn find_by_user_id(
        pool: &DbPool,
        user_id: DbId,
    ) -> Result<Option<Tenant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tenants WHERE user_id = ?1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Tenant>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List all tenants in creation order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Tenant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tenants ORDER BY id");
        sqlx::query_as::<_, Tenant>(&query).fetch_all(pool).await
    }

    /// Overwrite a tenant's join date, for tenancies that began before the
    /// record was entered.
    pub async fn set_join_date(
        pool: &DbPool,
        id: DbId,
        join_date: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE tenants SET join_date = ?2 WHERE id = ?1")
            .bind(id)
            .bind(join_date)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Update a tenant. Only non-`None` fields in `input` are applied;
    /// `Some(None)` clears a nullable column.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateTenant,
    ) -> Result<Option<Tenant>, sqlx::Error> {
        let query = format!(
            "UPDATE tenants SET
                user_id = COALESCE(?2, user_id),
                room_id = COALESCE(?3, room_id),
                leave_date = CASE WHEN ?4 THEN ?5 ELSE leave_date END,
                emergency_contact = CASE WHEN ?6 THEN ?7 ELSE emergency_contact END,
                id_proof = CASE WHEN ?8 THEN ?9 ELSE id_proof END,
                is_active = COALESCE(?10, is_active)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tenant>(&query)
            .bind(id)
            .bind(input.user_id)
            .bind(input.room_id)
            .bind(input.leave_date.is_some())
            .bind(input.leave_date.flatten())
            .bind(input.emergency_contact.is_some())
            .bind(input.emergency_contact.as_ref().and_then(|v| v.as_deref()))
            .bind(input.id_proof.is_some())
            .bind(input.id_proof.as_ref().and_then(|v| v.as_deref()))
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }
}
