//! Locality value object (street address, city or state).

use super::errors::{ContactField, ValidationError};
use super::string_value_object;

/// Minimum number of characters for an address part.
pub const MIN_LOCALITY_LEN: usize = 4;

/// Free-form address part with a minimum length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locality(String);

impl Locality {
    /// Validate `value` as the given address field.
    ///
    /// Length is counted in characters, not bytes.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` tagged with `field` when `value` is shorter
    /// than [`MIN_LOCALITY_LEN`].
    pub fn new(field: ContactField, value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if value.chars().count() < MIN_LOCALITY_LEN {
            return Err(ValidationError::new(
                field,
                "must be at least 4 characters",
                value,
            ));
        }

        Ok(Self(value))
    }

    /// Case-insensitive comparison against another value.
    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }
}

string_value_object!(Locality);
