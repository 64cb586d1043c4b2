//! Route definitions for the `/announcements` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::announcement;
use crate::state::AppState;

/// Routes mounted at `/announcements`.
///
/// ```text
/// GET    /         -> list
/// POST   /         -> create
/// GET    /active   -> list_active
/// PUT    /{id}     -> update
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(announcement::list).post(announcement::create))
        .route("/active", get(announcement::list_active))
        .route(
            "/{id}",
            put(announcement::update).delete(announcement::delete),
        )
}
