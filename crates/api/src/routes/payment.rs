//! Route definitions for the `/payments` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::payment;
use crate::state::AppState;

/// Routes mounted at `/payments`.
///
/// ```text
/// GET  /                      -> list (joined with tenant and user)
/// POST /                      -> create
/// PUT  /{id}                  -> update
/// GET  /tenant/{tenant_id}    -> list_by_tenant
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(payment::list).post(payment::create))
        .route("/{id}", put(payment::update))
        .route("/tenant/{tenant_id}", get(payment::list_by_tenant))
}
