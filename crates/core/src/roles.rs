//! Well-known role name constants.
//!
//! These must match the values stored in `users.role`.

use crate::error::CoreError;
use crate::validation::validate_one_of;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_TENANT: &str = "tenant";

/// All valid user roles.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_TENANT];

/// Validate a user role against the known set.
pub fn validate_role(role: &str) -> Result<(), CoreError> {
    validate_one_of("role", role, VALID_ROLES)
}
