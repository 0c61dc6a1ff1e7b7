//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
}

/// Generates a validated string ID newtype with common trait implementations.
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $name:ident, $field_name:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new ID after validation.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.is_empty() {
                    return Err(ValidationError::Empty { field: $field_name });
                }
                Ok(Self(id))
            }

            /// Returns the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_string_id!(
    /// A validated flight identifier.
    ///
    /// Flight IDs must be non-empty strings. They are assigned by the caller
    /// (or generated by the flight state container) and are unique per session.
    FlightId, "flight ID"
);

define_string_id!(
    /// A validated point-of-interest identifier.
    ///
    /// POI IDs must be non-empty strings. Itinerary items reference POIs by
    /// this identity rather than owning them.
    PoiId, "POI ID"
);

define_string_id!(
    /// A validated itinerary identifier.
    ItineraryId, "itinerary ID"
);

define_string_id!(
    /// A validated itinerary item identifier.
    ItemId, "item ID"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_id_rejects_empty() {
        assert!(FlightId::new("").is_err());
        assert!(FlightId::new("fl-123").is_ok());
    }

    #[test]
    fn poi_id_rejects_empty() {
        assert!(PoiId::new("").is_err());
        assert!(PoiId::new("poi-louvre").is_ok());
    }

    #[test]
    fn poi_id_serde_roundtrip() {
        let id = PoiId::new("poi-42").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"poi-42\"");
        let parsed: PoiId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn item_id_serde_rejects_empty() {
        let result: Result<ItemId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn itinerary_id_as_ref() {
        let id = ItineraryId::new("it-1").unwrap();
        let s: &str = id.as_ref();
        assert_eq!(s, "it-1");
    }
}
