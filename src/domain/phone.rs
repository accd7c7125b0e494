//! PhoneNumber value object.

use super::errors::{ContactField, ValidationError};
use super::string_value_object;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer};

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("Failed to compile phone regex"));

/// A ten-digit mobile number.
///
/// Only bare digits are accepted; formatting characters such as spaces,
/// hyphens or a leading country code are rejected rather than stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for the `phone` field unless the value is
    /// exactly 10 digits starting with 6, 7, 8 or 9.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !PHONE_REGEX.is_match(&phone) {
            return Err(ValidationError::new(
                ContactField::Phone,
                "must be 10 digits starting with 6-9",
                phone,
            ));
        }

        Ok(Self(phone))
    }
}

string_value_object!(PhoneNumber);

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}
