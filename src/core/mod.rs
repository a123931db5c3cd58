//! Core business logic - framework-agnostic store and stats operations.
//!
//! Each submodule owns one resource and operates directly on a
//! `sea_orm::DatabaseConnection`; nothing in here knows about HTTP.

/// Accessory store operations
pub mod accessory;
/// Fish store operations
pub mod fish;
/// Order store operations and line-item (de)serialization
pub mod order;
/// Summary statistics across all three tables
pub mod stats;

use serde::{Deserialize, Deserializer};

/// Deserializes a field so an explicit JSON `null` is distinguishable from an
/// omitted key. Pair with `#[serde(default)]` on a double-`Option` field: a
/// missing key stays `None`, `null` becomes `Some(None)`, and a value becomes
/// `Some(Some(value))`.
pub(crate) fn explicit_null<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
