//! Complaint priority, lifecycle status, and category rules.

use crate::error::CoreError;
use crate::validation::validate_one_of;

pub const PRIORITY_LOW: &str = "low";
pub const PRIORITY_MEDIUM: &str = "medium";
pub const PRIORITY_HIGH: &str = "high";

pub const VALID_PRIORITIES: &[&str] = &[PRIORITY_LOW, PRIORITY_MEDIUM, PRIORITY_HIGH];

pub const DEFAULT_PRIORITY: &str = PRIORITY_MEDIUM;

pub const STATUS_OPEN: &str = "open";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_RESOLVED: &str = "resolved";
pub const STATUS_CLOSED: &str = "closed";

/// Complaint lifecycle states.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_OPEN,
    STATUS_IN_PROGRESS,
    STATUS_RESOLVED,
    STATUS_CLOSED,
];

pub const DEFAULT_STATUS: &str = STATUS_OPEN;

pub const CATEGORY_MAINTENANCE: &str = "maintenance";
pub const CATEGORY_UTILITIES: &str = "utilities";
pub const CATEGORY_NOISE: &str = "noise";
pub const CATEGORY_OTHER: &str = "other";

pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_MAINTENANCE,
    CATEGORY_UTILITIES,
    CATEGORY_NOISE,
    CATEGORY_OTHER,
];

pub fn validate_priority(priority: &str) -> Result<(), CoreError> {
    validate_one_of("complaint priority", priority, VALID_PRIORITIES)
}

pub fn validate_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("complaint status", status, VALID_STATUSES)
}

pub fn validate_category(category: &str) -> Result<(), CoreError> {
    validate_one_of("complaint category", category, VALID_CATEGORIES)
}
