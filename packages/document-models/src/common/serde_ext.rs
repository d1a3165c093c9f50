//! Serde helpers for tri-state update fields.
//!
//! A nullable field in an `UPDATE_*` input has three meanings that must stay
//! distinct:
//!
//! | JSON            | Rust               | Effect            |
//! |-----------------|--------------------|-------------------|
//! | field absent    | `None`             | leave unchanged   |
//! | `null`          | `Some(None)`       | clear the value   |
//! | `"x"`           | `Some(Some("x"))`  | set the value     |
//!
//! Declare such fields as:
//!
//! ```ignore
//! #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
//! pub description: Option<Option<String>>,
//! ```
//!
//! `default` maps an absent field to `None`; `nullable` maps a present field
//! (including `null`) to `Some(..)`. Serialization writes `Some(None)` as `null`
//! and omits `None`, so inputs survive a round trip through the operation log.

use serde::{Deserialize, Deserializer};

/// Deserialize a present field into `Some(value)`, where `value` may be `None` for `null`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
