//! Newtype IDs for type-safe identifiers.
//!
//! Product ids are opaque strings ("1", "2", ...). Wrapping them keeps a
//! product id from being passed where a supplier name is expected, since
//! both are plain strings in the source data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique product identifier.
///
/// Serializes as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ProductId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ProductId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("12");
        assert_eq!(id.as_str(), "12");
    }

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "4".into();
        assert_eq!(id, "4");
    }

    #[test]
    fn test_id_display() {
        let id = ProductId::new("20");
        assert_eq!(format!("{}", id), "20");
    }

    #[test]
    fn test_id_serializes_as_bare_string() {
        let id = ProductId::new("3");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""3""#);
        let back: ProductId = serde_json::from_str(r#""3""#).unwrap();
        assert_eq!(back, id);
    }
}
