//! Route definitions for the `/tenants` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::tenant;
use crate::state::AppState;

/// Routes mounted at `/tenants`.
///
/// ```text
/// GET  /                 -> list (joined with user and room)
/// POST /                 -> create
/// GET  /{id}             -> get_by_id
/// PUT  /{id}             -> update
/// GET  /user/{user_id}   -> get_by_user_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tenant::list).post(tenant::create))
        .route("/{id}", get(tenant::get_by_id).put(tenant::update))
        .route("/user/{user_id}", get(tenant::get_by_user_id))
}
