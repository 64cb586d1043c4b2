//! PG manager API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes, seed
//! data) so integration tests and the binary entrypoint can both access them.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod seed;
pub mod state;
