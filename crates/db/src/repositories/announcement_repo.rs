//! Repository for the `announcements` table.

use chrono::Utc;
use pgmanager_core::announcement::{DEFAULT_AUDIENCE, DEFAULT_PRIORITY};
use pgmanager_core::types::DbId;

use crate::models::announcement::{Announcement, CreateAnnouncement, UpdateAnnouncement};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, content, priority, target_audience, is_active, created_by, created_at";

/// Provides CRUD operations for announcements.
pub struct AnnouncementRepo;

impl AnnouncementRepo {
    /// Insert a new announcement, returning the created row.
    pub async fn create(
        pool: &DbPool,
        input: &CreateAnnouncement,
    ) -> Result<Announcement, sqlx::Error> {
        let query = format!(
            "INSERT INTO announcements
                (title, content, priority, target_audience, is_active, created_by, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.priority.as_deref().unwrap_or(DEFAULT_PRIORITY))
            .bind(input.target_audience.as_deref().unwrap_or(DEFAULT_AUDIENCE))
            .bind(input.is_active.unwrap_or(true))
            .bind(input.created_by)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find an announcement by its internal ID.
    pub async fn find_by_id(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<Announcement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM announcements WHERE id = ?1");
        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all announcements in creation order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Announcement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM announcements ORDER BY id");
        sqlx::query_as::<_, Announcement>(&query)
            .fetch_all(pool)
            .await
    }

    /// List only announcements with `is_active = true`.
    ///
    /// Does not filter on `target_audience`.
    pub async fn list_active(pool: &DbPool) -> Result<Vec<Announcement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM announcements WHERE is_active = 1 ORDER BY id");
        sqlx::query_as::<_, Announcement>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update an announcement. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateAnnouncement,
    ) -> Result<Option<Announcement>, sqlx::Error> {
        let query = format!(
            "UPDATE announcements SET
                title = COALESCE(?2, title),
                content = COALESCE(?3, content),
                priority = COALESCE(?4, priority),
                target_audience = COALESCE(?5, target_audience),
                is_active = COALESCE(?6, is_active),
                created_by = CASE WHEN ?7 THEN ?8 ELSE created_by END
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.priority)
            .bind(&input.target_audience)
            .bind(input.is_active)
            .bind(input.created_by.is_some())
            .bind(input.created_by.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an announcement. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
