//! Route definitions for the `/complaints` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::complaint;
use crate::state::AppState;

/// Routes mounted at `/complaints`.
///
/// ```text
/// GET  /                      -> list (joined with tenant and user)
/// POST /                      -> create
/// PUT  /{id}                  -> update
/// GET  /tenant/{tenant_id}    -> list_by_tenant
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(complaint::list).post(complaint::create))
        .route("/{id}", put(complaint::update))
        .route("/tenant/{tenant_id}", get(complaint::list_by_tenant))
}
