//! Field-level validation helpers shared by every entity module.

use crate::error::CoreError;

/// Validate that `value` is one of the allowed values for `field`.
pub fn validate_one_of(field: &str, value: &str, valid: &[&str]) -> Result<(), CoreError> {
    if !valid.contains(&value) {
        return Err(CoreError::Validation(format!(
            "Invalid {field} '{value}'. Valid values: {}",
            valid.join(", ")
        )));
    }
    Ok(())
}

/// Validate that a required text field is not blank.
pub fn validate_not_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate that a money amount or count is strictly positive.
pub fn validate_positive(field: &str, value: i64) -> Result<(), CoreError> {
    if value <= 0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a positive integer, got {value}"
        )));
    }
    Ok(())
}
