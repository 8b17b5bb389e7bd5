//! Newtype IDs for type-safe identifiers.
//!
//! A listing id and a product id are both plain strings in the sample data;
//! the newtypes keep a `ListingId` from being passed where a `ProductId` is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
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
                f.write_str(&self.0)
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

define_id!(
    /// Identifier of a catalog product. Cart lines are keyed by it too.
    ProductId
);
define_id!(
    /// Identifier of a seller's listing.
    ListingId
);
define_id!(
    /// Identifier of a placed order.
    OrderId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("prod-123");
        assert_eq!(id.as_str(), "prod-123");
    }

    #[test]
    fn test_id_from_str() {
        let id: ListingId = "listing-456".into();
        assert_eq!(id.as_str(), "listing-456");
        assert_eq!(id.into_inner(), "listing-456");
    }

    #[test]
    fn test_id_display() {
        let id = OrderId::new("order-7");
        assert_eq!(format!("{}", id), "order-7");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("3");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"3\"");
        let back: ProductId = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(back, id);
    }
}
