pub mod announcement;
pub mod auth;
pub mod complaint;
pub mod dashboard;
pub mod health;
pub mod payment;
pub mod room;
pub mod tenant;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /login                              login
/// /register                           register
///
/// /dashboard/stats                    headline numbers
///
/// /rooms                              list, create
/// /rooms/{id}                         get, update, delete
///
/// /tenants                            list (joined), create
/// /tenants/{id}                       get (joined), update
/// /tenants/user/{user_id}             get (joined) by user account
///
/// /payments                           list (joined), create
/// /payments/{id}                      update
/// /payments/tenant/{tenant_id}        list for one tenant
///
/// /complaints                         list (joined), create
/// /complaints/{id}                    update
/// /complaints/tenant/{tenant_id}      list for one tenant
///
/// /announcements                      list, create
/// /announcements/active               list active only
/// /announcements/{id}                 update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/dashboard", dashboard::router())
        .nest("/rooms", room::router())
        .nest("/tenants", tenant::router())
        .nest("/payments", payment::router())
        .nest("/complaints", complaint::router())
        .nest("/announcements", announcement::router())
}
