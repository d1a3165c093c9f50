//! Typed opaque identifiers for compile-time type safety.
//!
//! `Oid<T>` wraps a caller-supplied string id and tags it with the entity type
//! it belongs to, so a `ServiceId` can never be passed where a `TierId` is
//! expected. Ids are never generated here: whoever builds an operation input
//! supplies them.
//!
//! # Example
//!
//! ```rust
//! use document_models::common::Oid;
//!
//! pub struct Service;
//! pub struct Tier;
//!
//! pub type ServiceId = Oid<Service>;
//! pub type TierId = Oid<Tier>;
//!
//! let service_id = ServiceId::new("svc-1");
//! assert_eq!(service_id.as_str(), "svc-1");
//!
//! // This would be a compile error:
//! // let wrong: TierId = service_id;
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

/// A typed wrapper around an opaque string id.
///
/// The type parameter `T` is the entity the id belongs to. On the wire the id
/// is a plain JSON string.
#[repr(transparent)]
pub struct Oid<T>(String, PhantomData<fn() -> T>);

// ============================================================================
// Core implementations
// ============================================================================

impl<T> Oid<T> {
    /// Wraps a caller-supplied id.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into(), PhantomData)
    }

    /// Returns the id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the inner string.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` for the empty id.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// Standard trait implementations
// ============================================================================

impl<T> Clone for Oid<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<T> Debug for Oid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_name = std::any::type_name::<T>();
        let short = type_name.rsplit("::").next().unwrap_or(type_name);
        f.debug_tuple(&format!("Oid<{}>", short))
            .field(&self.0)
            .finish()
    }
}

impl<T> Display for Oid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<T> PartialEq for Oid<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Oid<T> {}

impl<T> PartialEq<str> for Oid<T> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl<T> PartialEq<&str> for Oid<T> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl<T> PartialOrd for Oid<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Oid<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> Hash for Oid<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> AsRef<str> for Oid<T> {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<T> From<&str> for Oid<T> {
    #[inline]
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl<T> From<String> for Oid<T> {
    #[inline]
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl<T> From<Oid<T>> for String {
    #[inline]
    fn from(id: Oid<T>) -> Self {
        id.0
    }
}

impl<T> FromStr for Oid<T> {
    type Err = Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

// ============================================================================
// Serde support
// ============================================================================

impl<T> Serialize for Oid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Oid<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget;

    type WidgetId = Oid<Widget>;

    #[test]
    fn test_serializes_as_plain_string() {
        let id = WidgetId::new("w-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"w-1\"");

        let parsed: WidgetId = serde_json::from_str("\"w-1\"").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_compares_with_str() {
        let id: WidgetId = "w-2".into();
        assert_eq!(id, "w-2");
        assert_ne!(id, WidgetId::new("w-3"));
    }

    #[test]
    fn test_hash_map_key() {
        use std::collections::HashMap;
        let mut map: HashMap<WidgetId, &str> = HashMap::new();
        map.insert(WidgetId::new("w-1"), "test");
        assert_eq!(map.get(&WidgetId::new("w-1")), Some(&"test"));
    }

    #[test]
    fn test_debug_includes_type_name() {
        let debug = format!("{:?}", WidgetId::new("w-1"));
        assert_eq!(debug, "Oid<Widget>(\"w-1\")");
    }
}
