//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the validated parts of a
//! contact: person names, address parts, zip codes, phone numbers and
//! email addresses. Each value object validates at construction time, so an
//! invalid value can never be represented.

/// Implements the shared string accessors, `Display` and `Serialize` for a
/// single-field value object.
macro_rules! string_value_object {
    ($ty:ident) => {
        impl $ty {
            /// Get the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert into the underlying String.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        // Serde support - serialize as string
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&self.0, serializer)
            }
        }
    };
}

pub(crate) use string_value_object;

pub mod email;
pub mod errors;
pub mod locality;
pub mod name;
pub mod phone;
pub mod zip;

pub use email::EmailAddress;
pub use errors::{ContactField, ValidationError};
pub use locality::Locality;
pub use name::PersonName;
pub use phone::PhoneNumber;
pub use zip::ZipCode;
