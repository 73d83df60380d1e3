//! Typed ID wrappers for domain entities.
//!
//! Identifiers are database-assigned integers; the newtypes keep a
//! computer id from being handed to a company lookup.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::num::ParseIntError;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Wraps a raw database identifier.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Parses an ID from a string.
            pub fn parse(s: &str) -> Result<Self, ParseIntError> {
                Ok(Self(s.parse()?))
            }

            /// Returns the inner value.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// A strongly-typed wrapper for computer IDs.
    ComputerId
}

define_id! {
    /// A strongly-typed wrapper for company IDs.
    CompanyId
}

define_id! {
    /// A strongly-typed wrapper for user IDs.
    UserId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = ComputerId::new(42);
        assert_eq!(id.into_inner(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(ComputerId::from(42), id);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(CompanyId::new(7).to_string(), "7");
    }

    #[test]
    fn test_id_parse() {
        assert_eq!(UserId::parse("13").unwrap(), UserId::new(13));
        assert!(UserId::parse("not-a-number").is_err());
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = ComputerId::new(99);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "99");
        let back: ComputerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
