//! Payment entity model, DTOs, and joined view.

use pgmanager_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::tenant::TenantWithUser;

/// A payment row from the `payments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: DbId,
    pub tenant_id: DbId,
    pub amount: i64,
    /// Billing month, `YYYY-MM`.
    pub month: String,
    pub status: String,
    pub paid_at: Option<Timestamp>,
    pub due_date: Timestamp,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new payment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayment {
    pub tenant_id: DbId,
    pub amount: i64,
    pub month: String,
    /// Defaults to `pending` if omitted.
    pub status: Option<String>,
    pub paid_at: Option<Timestamp>,
    pub due_date: Timestamp,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
}

/// DTO for updating an existing payment. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePayment {
    pub tenant_id: Option<DbId>,
    pub amount: Option<i64>,
    pub month: Option<String>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub paid_at: Option<Option<Timestamp>>,
    pub due_date: Option<Timestamp>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub payment_method: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub transaction_id: Option<Option<String>>,
}

/// A payment with its tenant (and the tenant's user) attached.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentWithTenant {
    #[serde(flatten)]
    pub payment: Payment,
    pub tenant: TenantWithUser,
}
