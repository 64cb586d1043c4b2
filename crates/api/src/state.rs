use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference counted, the config is
/// behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Entity store connection pool.
    pub pool: pgmanager_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
