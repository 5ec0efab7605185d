//! Newtype IDs for type-safe entity references.
//!
//! The inventory API is loose about identifier types: the same id may arrive
//! as a JSON string in one response and as a number in another. Every id is
//! therefore stored as a trimmed, non-empty string and deserializes from
//! either representation.

use serde::Deserialize;

/// Reserved `userId` value meaning the lookup returned no user.
pub const NOT_FOUND_SENTINEL: &str = "not-found";

/// Reserved `userId` value meaning the lookup request itself failed.
pub const ERROR_SENTINEL: &str = "error";

/// Raw id as sent by the API, before normalization.
#[doc(hidden)]
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(i64),
}

impl RawId {
    /// Convert into the string form used by [`define_id!`] types.
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(n) => n.to_string(),
        }
    }
}

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize` with `#[serde(transparent)]`
/// - `Deserialize` from a JSON string or number, rejecting blank values
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `Display`
/// - `new()` returning `None` for blank input, and `as_str()`
///
/// # Example
///
/// ```rust
/// # use qr_inventory_core::define_id;
/// define_id!(ShopId);
///
/// assert_eq!(ShopId::new(" 42 ").unwrap().as_str(), "42");
/// assert!(ShopId::new("   ").is_none());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID, trimming whitespace. Returns `None` when blank.
            #[must_use]
            pub fn new(id: impl AsRef<str>) -> Option<Self> {
                let id = id.as_ref().trim();
                if id.is_empty() {
                    None
                } else {
                    Some(Self(id.to_owned()))
                }
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <$crate::types::id::RawId as ::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Self::new(raw.into_string()).ok_or_else(|| {
                    <D::Error as ::serde::de::Error>::custom(concat!(
                        stringify!($name),
                        " cannot be blank"
                    ))
                })
            }
        }
    };
}

define_id!(UserId);
define_id!(MobileId);

/// The `userId` value carried in the viewer URL.
///
/// The resolver signals lookup failures through the URL itself by writing a
/// sentinel in place of a real id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserRef {
    /// A resolved user id.
    Id(UserId),
    /// The lookup succeeded but returned no user (`not-found`).
    NotFound,
    /// The lookup request failed (`error`).
    Failed,
}

impl UserRef {
    /// Parse a raw `userId` value. Returns `None` when blank.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            NOT_FOUND_SENTINEL => Some(Self::NotFound),
            ERROR_SENTINEL => Some(Self::Failed),
            other => UserId::new(other).map(Self::Id),
        }
    }

    /// The value written into the `userId` query parameter.
    #[must_use]
    pub fn as_query_value(&self) -> &str {
        match self {
            Self::Id(id) => id.as_str(),
            Self::NotFound => NOT_FOUND_SENTINEL,
            Self::Failed => ERROR_SENTINEL,
        }
    }
}
