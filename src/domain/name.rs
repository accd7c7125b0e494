//! PersonName value object.

use super::errors::{ContactField, ValidationError};
use super::string_value_object;
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z]{2,}$").expect("Failed to compile name regex"));

/// A first or last name.
///
/// Names start with an uppercase ASCII letter, are at least three characters
/// long and contain only letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Validate `name` as the given name field.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` tagged with `field` when the pattern does not match.
    pub fn new(field: ContactField, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if !NAME_REGEX.is_match(&name) {
            return Err(ValidationError::new(
                field,
                "must start with an uppercase letter and have at least 3 letters",
                name,
            ));
        }

        Ok(Self(name))
    }

    /// Case-insensitive comparison against another name.
    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }
}

string_value_object!(PersonName);
