//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate numeric ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create an ID from its raw value
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Get the raw value
            pub const fn get(&self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }
    };
}

define_id!(OrderId);
define_id!(ProductId);
define_id!(CategoryId);
define_id!(SupplierId);
define_id!(EmployeeId);
define_id!(ShipperId);

/// Customer identifier
///
/// Northwind customers use short text codes (e.g. `ALFKI`) rather than
/// numbers, so this one wraps a string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CustomerId {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(EmployeeId::new(7).to_string(), "7");
        assert_eq!(ProductId::new(42).to_string(), "42");
        assert_eq!(CustomerId::from("ALFKI").to_string(), "ALFKI");
    }

    #[test]
    fn test_id_ordering() {
        assert!(ProductId::new(1) < ProductId::new(2));
        assert!(CustomerId::from("ALFKI") < CustomerId::from("BONAP"));
    }

    #[test]
    fn test_id_serialization() {
        let id = OrderId::new(10248);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "10248");
        let deserialized: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);

        let customer: CustomerId = serde_json::from_str("\"VINET\"").unwrap();
        assert_eq!(customer.as_str(), "VINET");
    }
}
