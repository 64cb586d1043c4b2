//! Handlers for the `/payments` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pgmanager_core::error::CoreError;
use pgmanager_core::payment::{validate_amount, validate_method, validate_month, validate_status};
use pgmanager_core::types::DbId;
use pgmanager_db::joins;
use pgmanager_db::models::payment::{CreatePayment, Payment, PaymentWithTenant, UpdatePayment};
use pgmanager_db::repositories::PaymentRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::tenant::ensure_tenant_exists;
use crate::state::AppState;

/// GET /api/payments
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PaymentWithTenant>>> {
    let payments = joins::payments_with_tenant(&state.pool).await?;
    Ok(Json(payments))
}

/// GET /api/payments/tenant/{tenant_id}
pub async fn list_by_tenant(
    State(state): State<AppState>,
    AppPath(tenant_id): AppPath<DbId>,
) -> AppResult<Json<Vec<Payment>>> {
    let payments = PaymentRepo::list_by_tenant(&state.pool, tenant_id).await?;
    Ok(Json(payments))
}

/// POST /api/payments
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePayment>,
) -> AppResult<(StatusCode, Json<Payment>)> {
    validate_amount(input.amount)?;
    validate_month(&input.month)?;
    if let Some(status) = &input.status {
        validate_status(status)?;
    }
    if let Some(method) = &input.payment_method {
        validate_method(method)?;
    }
    ensure_tenant_exists(&state.pool, input.tenant_id).await?;

    let payment = PaymentRepo::create(&state.pool, &input).await?;

    tracing::info!(
        payment_id = payment.id,
        tenant_id = payment.tenant_id,
        month = %payment.month,
        "Payment recorded",
    );
    Ok((StatusCode::CREATED, Json(payment)))
}

/// PUT /api/payments/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdatePayment>,
) -> AppResult<Json<Payment>> {
    if let Some(amount) = input.amount {
        validate_amount(amount)?;
    }
    if let Some(month) = &input.month {
        validate_month(month)?;
    }
    if let Some(status) = &input.status {
        validate_status(status)?;
    }
    if let Some(Some(method)) = &input.payment_method {
        validate_method(method)?;
    }
    if let Some(tenant_id) = input.tenant_id {
        ensure_tenant_exists(&state.pool, tenant_id).await?;
    }

    let payment = PaymentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Payment",
            id,
        }))?;

    tracing::info!(payment_id = id, status = %payment.status, "Payment updated");
    Ok(Json(payment))
}
