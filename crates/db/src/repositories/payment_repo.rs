//! Repository for the `payments` table.

use chrono::Utc;
use pgmanager_core::payment::DEFAULT_STATUS;
use pgmanager_core::types::DbId;

use crate::models::payment::{CreatePayment, Payment, UpdatePayment};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, amount, month, status, paid_at, due_date, \
                       payment_method, transaction_id, created_at";

/// Provides CRUD operations for rent payments. Payments are never deleted.
pub struct PaymentRepo;

impl PaymentRepo {
    /// Insert a new payment, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `pending`.
    pub async fn create(pool: &DbPool, input: &CreatePayment) -> Result<Payment, sqlx::Error> {
        let query = format!(
            "INSERT INTO payments
                (tenant_id, amount, month, status, paid_at, due_date,
                 payment_method, transaction_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(input.tenant_id)
            .bind(input.amount)
            .bind(&input.month)
            .bind(input.status.as_deref().unwrap_or(DEFAULT_STATUS))
            .bind(input.paid_at.is_some())
            .bind(input.paid_at)
            .bind(input.due_date)
            .bind(input.payment_method.is_some())
            .bind(input.payment_method.as_deref())
            .bind(input.transaction_id.is_some())
            .bind(input.transaction_id.as_deref())
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a payment by its internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payments WHERE id = ?1");
        sqlx::query_as::<_, Payment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all payments in creation order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payments ORDER BY id");
        sqlx::query_as::<_, Payment>(&query).fetch_all(pool).await
    }

    /// List every payment recorded against a tenant.
    pub async fn list_by_tenant(
        pool: &DbPool,
        tenant_id: DbId,
    ) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payments WHERE tenant_id = ?1 ORDER BY id");
        sqlx::query_as::<_, Payment>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// Update a payment. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdatePayment,
    ) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!(
            "UPDATE payments SET
                tenant_id = COALESCE(?2, tenant_id),
                amount = COALESCE(?3, amount),
                month = COALESCE(?4, month),
                status = COALESCE(?5, status),
                paid_at = CASE WHEN ?6 THEN ?7 ELSE paid_at END,
                due_date = COALESCE(?8, due_date),
                payment_method = CASE WHEN ?9 THEN ?10 ELSE payment_method END,
                transaction_id = CASE WHEN ?11 THEN ?12 ELSE transaction_id END
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(id)
            .bind(input.tenant_id)
            .bind(input.amount)
            .bind(&input.month)
            .bind(&input.status)
            .bind(input.paid_at.is_some())
            .bind(input.paid_at.flatten())
            .bind(input.due_date)
            .bind(input.payment_method.is_some())
            .bind(input.payment_method.as_ref().and_then(|v| v.as_deref()))
            .bind(input.transaction_id.is_some())
            .bind(input.transaction_id.as_ref().and_then(|v| v.as_deref()))
            .fetch_optional(pool)
            .await
    }
}
