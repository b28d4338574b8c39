//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Ord`
/// - Conversion methods: `new()`, `as_i32()`
/// - `From<i32>` and `Into<i32>` implementations
///
/// # Example
///
/// ```rust
/// # use sabrosa_core::define_id;
/// define_id!(ProductId);
///
/// let bread = ProductId::new(1);
/// assert_eq!(bread.as_i32(), 1);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ProductId);

/// Catalog identifier for an add-on (e.g. `"walnuts"`).
///
/// Add-on IDs are short catalog-bound strings; they are compared and sorted
/// lexicographically when building a configuration merge key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddOnId(String);

impl AddOnId {
    /// Create an add-on ID from a string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AddOnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AddOnId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for AddOnId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Unique identifier for a cart line, stable across edits and quantity
/// changes so the UI can address a line after the cart reorders around it.
///
/// Generated per line with UUID v4; uniqueness within a session is the only
/// requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(Uuid);

impl LineId {
    /// Generate a fresh line ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for LineId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn product_id_roundtrip() {
        let id = ProductId::new(3);
        assert_eq!(i32::from(id), 3);
        assert_eq!(ProductId::from(3), id);
        assert_eq!(id.to_string(), "3");
    }

    #[test]
    fn add_on_ids_sort_lexicographically() {
        let mut ids = vec![AddOnId::from("walnuts"), AddOnId::from("olives")];
        ids.sort();
        assert_eq!(ids.first().unwrap().as_str(), "olives");
    }

    #[test]
    fn line_ids_are_unique() {
        assert_ne!(LineId::generate(), LineId::generate());
    }

    #[test]
    fn line_id_parses_its_display_form() {
        let id = LineId::generate();
        let parsed: LineId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }
}
