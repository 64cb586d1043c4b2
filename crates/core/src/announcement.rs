//! Announcement priority and audience rules.
//!
//! The target audience is stored as a scope marker only; listing does not
//! filter on it.

use crate::error::CoreError;
use crate::validation::validate_one_of;

pub const PRIORITY_LOW: &str = "low";
pub const PRIORITY_NORMAL: &str = "normal";
pub const PRIORITY_HIGH: &str = "high";

pub const VALID_PRIORITIES: &[&str] = &[PRIORITY_LOW, PRIORITY_NORMAL, PRIORITY_HIGH];

pub const DEFAULT_PRIORITY: &str = PRIORITY_NORMAL;

pub const AUDIENCE_ALL: &str = "all";
pub const AUDIENCE_SPECIFIC_ROOM: &str = "specific_room";
pub const AUDIENCE_SPECIFIC_TENANT: &str = "specific_tenant";

pub const VALID_AUDIENCES: &[&str] = &[
    AUDIENCE_ALL,
    AUDIENCE_SPECIFIC_ROOM,
    AUDIENCE_SPECIFIC_TENANT,
];

pub const DEFAULT_AUDIENCE: &str = AUDIENCE_ALL;

pub fn validate_priority(priority: &str) -> Result<(), CoreError> {
    validate_one_of("announcement priority", priority, VALID_PRIORITIES)
}

pub fn validate_audience(audience: &str) -> Result<(), CoreError> {
    validate_one_of("target audience", audience, VALID_AUDIENCES)
}
