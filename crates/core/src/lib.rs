//! Domain rules for the PG manager: shared types, error taxonomy, and the
//! validation rules each entity's request bodies must satisfy.
//!
//! No I/O lives here so the rules can be shared by the store and the API.

pub mod announcement;
pub mod complaint;
pub mod error;
pub mod payment;
pub mod roles;
pub mod room;
pub mod types;
pub mod validation;
