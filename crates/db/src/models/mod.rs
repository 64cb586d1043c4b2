//! Domain model structs and DTOs.
//!
//! Each entity submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the table row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for partial merges
//!
//! Wire names are camelCase. Unknown JSON fields are ignored, so a client
//! cannot supply `id` or `createdAt`.
//!
//! Nullable columns use `Option<Option<T>>` in update DTOs:
//! `None` = key absent (keep), `Some(None)` = explicit `null` (clear),
//! `Some(Some(v))` = set.

use serde::{Deserialize, Deserializer};

pub mod announcement;
pub mod complaint;
pub mod dashboard;
pub mod payment;
pub mod room;
pub mod tenant;
pub mod user;

/// Deserialize a present key into `Some`, so an explicit `null` becomes
/// `Some(None)`. Pair with `#[serde(default)]` so an absent key stays `None`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Treat an explicit `null` like an absent key and fall back to `T::default()`.
pub(crate) fn null_as_default<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Deserialize<'de> + Default,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
