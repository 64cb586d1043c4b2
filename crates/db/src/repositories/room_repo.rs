//! Repository for the `rooms` table.

use chrono::Utc;
use pgmanager_core::room::DEFAULT_STATUS;
use pgmanager_core::types::DbId;
use sqlx::types::Json;

use crate::models::room::{CreateRoom, Room, UpdateRoom};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, number, room_type, rent, status, amenities, created_at";

/// Provides CRUD operations for rooms.
pub struct RoomRepo;

impl RoomRepo {
    /// Insert a new room, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `vacant`.
    pub async fn create(pool: &DbPool, input: &CreateRoom) -> Result<Room, sqlx::Error> {
        let query = format!(
            "INSERT INTO rooms (number, room_type, rent, status, amenities, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(&input.number)
            .bind(&input.room_type)
            .bind(input.rent)
            .bind(input.status.as_deref().unwrap_or(DEFAULT_STATUS))
            .bind(Json(&input.amenities))
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a room by its internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = ?1");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a room by its (unique) room number.
    pub async fn find_by_number(pool: &DbPool, number: &str) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE number = ?1");
        sqlx::query_as::<_, Room>(&query)
            .bind(number)
            .fetch_optional(pool)
            .await
    }

    /// List all rooms in creation order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms ORDER BY id");
        sqlx::query_as::<_, Room>(&query).fetch_all(pool).await
    }

    /// Update a room. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateRoom,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!(
            "UPDATE rooms SET
                number = COALESCE(?2, number),
                room_type = COALESCE(?3, room_type),
                rent = COALESCE(?4, rent),
                status = COALESCE(?5, status),
                amenities = COALESCE(?6, amenities)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .bind(&input.number)
            .bind(&input.room_type)
            .bind(input.rent)
            .bind(&input.status)
            .bind(
                input
                    .amenities
                    .as_ref()
                    .map(|list| Json(list.as_deref().unwrap_or_default())),
            )
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a room by ID. Returns `true` if a row was removed.
    ///
    /// Tenants pointing at the room are left untouched.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
