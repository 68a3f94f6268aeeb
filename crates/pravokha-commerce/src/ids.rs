//! Newtype IDs for type-safe identifiers.
//!
//! Catalog identifiers are opaque strings owned by the catalog; wrapping
//! them in newtypes keeps a `ProductId` from being passed where a
//! `VariantId` belongs.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident) => {
        /// An opaque string identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(VariantId);
define_id!(OrderId);

impl OrderId {
    /// Generate an order number: the last eight digits of the
    /// epoch-millisecond clock, the format shown on order confirmations.
    pub fn generate() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        use std::time::{SystemTime, UNIX_EPOCH};

        static BUMP: AtomicU64 = AtomicU64::new(0);

        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        // Two orders within the same millisecond still get distinct numbers.
        let n = (millis + BUMP.fetch_add(1, Ordering::SeqCst)) % 100_000_000;
        Self(format!("{n:08}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("1");
        assert_eq!(id.as_str(), "1");
    }

    #[test]
    fn test_id_from_str() {
        let id: VariantId = "1-teal".into();
        assert_eq!(id.as_str(), "1-teal");
    }

    #[test]
    fn test_id_display() {
        let id = ProductId::new("prod-7");
        assert_eq!(format!("{}", id), "prod-7");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(VariantId::new("2-black"), VariantId::new("2-black"));
        assert_ne!(VariantId::new("2-black"), VariantId::new("2-navy"));
    }

    #[test]
    fn test_order_id_is_eight_digits() {
        let id = OrderId::generate();
        assert_eq!(id.as_str().len(), 8);
        assert!(id.as_str().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_order_ids_are_distinct() {
        assert_ne!(OrderId::generate(), OrderId::generate());
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1\"");
    }
}
