//! Rent payment rules: status lifecycle, payment methods, and billing month
//! format.

use crate::error::CoreError;
use crate::validation::{validate_one_of, validate_positive};

pub const STATUS_PAID: &str = "paid";
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_OVERDUE: &str = "overdue";

/// All valid payment statuses. Mutually exclusive.
pub const VALID_STATUSES: &[&str] = &[STATUS_PAID, STATUS_PENDING, STATUS_OVERDUE];

pub const DEFAULT_STATUS: &str = STATUS_PENDING;

pub const METHOD_CASH: &str = "cash";
pub const METHOD_UPI: &str = "upi";
pub const METHOD_BANK_TRANSFER: &str = "bank_transfer";

/// All accepted payment methods.
pub const VALID_METHODS: &[&str] = &[METHOD_CASH, METHOD_UPI, METHOD_BANK_TRANSFER];

pub fn validate_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("payment status", status, VALID_STATUSES)
}

pub fn validate_method(method: &str) -> Result<(), CoreError> {
    validate_one_of("payment method", method, VALID_METHODS)
}

pub fn validate_amount(amount: i64) -> Result<(), CoreError> {
    validate_positive("amount", amount)
}

/// Validate a billing month in `YYYY-MM` form with a month between 01 and 12.
pub fn validate_month(month: &str) -> Result<(), CoreError> {
    let invalid = || {
        CoreError::Validation(format!(
            "Invalid month '{month}'. Expected format YYYY-MM"
        ))
    };

    let (year, mm) = month.split_once('-').ok_or_else(invalid)?;
    if year.len() != 4 || mm.len() != 2 {
        return Err(invalid());
    }
    if !year.chars().all(|c| c.is_ascii_digit()) || !mm.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let mm: u32 = mm.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&mm) {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_months() {
        assert!(validate_month("2024-12").is_ok());
        assert!(validate_month("2025-01").is_ok());
    }

    #[test]
    fn malformed_months() {
        for bad in ["2024-13", "2024-00", "24-12", "2024/12", "2024-1", "abcd-12", ""] {
            assert!(validate_month(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn statuses_and_methods() {
        assert!(validate_status(STATUS_OVERDUE).is_ok());
        assert!(validate_status("refunded").is_err());
        assert!(validate_method(METHOD_BANK_TRANSFER).is_ok());
        assert!(validate_method("cheque").is_err());
    }

    #[test]
    fn amount_must_be_positive() {
        assert!(validate_amount(-1).is_err());
        assert!(validate_amount(2500).is_ok());
    }
}
