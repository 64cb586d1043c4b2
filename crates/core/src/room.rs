//! Room type and occupancy status rules.

use crate::error::CoreError;
use crate::validation::{validate_not_blank, validate_one_of, validate_positive};

// ---------------------------------------------------------------------------
// Room types
// ---------------------------------------------------------------------------

pub const TYPE_SINGLE: &str = "single";
pub const TYPE_DOUBLE: &str = "double";
pub const TYPE_TRIPLE: &str = "triple";

/// All valid room types.
pub const VALID_TYPES: &[&str] = &[TYPE_SINGLE, TYPE_DOUBLE, TYPE_TRIPLE];

// ---------------------------------------------------------------------------
// Room statuses
// ---------------------------------------------------------------------------

pub const STATUS_OCCUPIED: &str = "occupied";
pub const STATUS_VACANT: &str = "vacant";
pub const STATUS_MAINTENANCE: &str = "maintenance";

/// All valid room statuses. Mutually exclusive.
pub const VALID_STATUSES: &[&str] = &[STATUS_OCCUPIED, STATUS_VACANT, STATUS_MAINTENANCE];

/// Status assigned when a room is created without one.
pub const DEFAULT_STATUS: &str = STATUS_VACANT;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a room number (non-empty).
pub fn validate_number(number: &str) -> Result<(), CoreError> {
    validate_not_blank("number", number)
}

pub fn validate_type(room_type: &str) -> Result<(), CoreError> {
    validate_one_of("room type", room_type, VALID_TYPES)
}

pub fn validate_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("room status", status, VALID_STATUSES)
}

/// Validate monthly rent (positive whole currency units).
pub fn validate_rent(rent: i64) -> Result<(), CoreError> {
    validate_positive("rent", rent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_types() {
        for t in VALID_TYPES {
            assert!(validate_type(t).is_ok());
        }
        assert!(validate_type("quad").is_err());
    }

    #[test]
    fn room_statuses() {
        assert!(validate_status(STATUS_MAINTENANCE).is_ok());
        assert!(validate_status("booked").is_err());
    }

    #[test]
    fn default_status_is_valid() {
        assert!(validate_status(DEFAULT_STATUS).is_ok());
    }

    #[test]
    fn rent_must_be_positive() {
        assert!(validate_rent(2600).is_ok());
        assert!(validate_rent(0).is_err());
    }

    #[test]
    fn blank_number_rejected() {
        assert!(validate_number("").is_err());
        assert!(validate_number("301").is_ok());
    }
}
