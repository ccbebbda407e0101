//! Newtype ID for type-safe product identifiers.
//!
//! The remote catalog keys products by integer id; wrapping it prevents a
//! raw quantity or stock count from being passed where an id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique product identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Create a product id from its raw value.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_value_round_trip() {
        let id = ProductId::new(42);
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn test_id_display() {
        let id = ProductId::new(7);
        assert_eq!(format!("{}", id), "7");
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = ProductId::new(13);
        assert_eq!(serde_json::to_string(&id).unwrap(), "13");

        let parsed: ProductId = serde_json::from_str("13").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ProductId::new(1), ProductId::from(1));
        assert_ne!(ProductId::new(1), ProductId::new(2));
    }
}
