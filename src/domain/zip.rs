//! ZipCode value object.

use super::errors::{ContactField, ValidationError};
use super::string_value_object;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer};

static ZIP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]{5}$").expect("Failed to compile zip regex"));

/// A six-digit postal code whose first digit is never zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZipCode(String);

impl ZipCode {
    /// Create a new ZipCode.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for the `zip` field unless the value is
    /// exactly 6 digits with a leading digit of 1-9.
    pub fn new(zip: impl Into<String>) -> Result<Self, ValidationError> {
        let zip = zip.into();

        if !ZIP_REGEX.is_match(&zip) {
            return Err(ValidationError::new(
                ContactField::Zip,
                "must be 6 digits not starting with 0",
                zip,
            ));
        }

        Ok(Self(zip))
    }
}

string_value_object!(ZipCode);

impl<'de> Deserialize<'de> for ZipCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ZipCode::new(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_valid() {
        assert_eq!(ZipCode::new("250002").unwrap().as_str(), "250002");
        assert!(ZipCode::new("999999").is_ok());
    }

    #[test]
    fn test_zip_rejects_wrong_length() {
        let err = ZipCode::new("12345").unwrap_err();
        assert_eq!(err.field, ContactField::Zip);
        assert!(ZipCode::new("1234567").is_err());
    }

    #[test]
    fn test_zip_rejects_leading_zero_and_letters() {
        assert!(ZipCode::new("012345").is_err());
        assert!(ZipCode::new("12a456").is_err());
        assert!(ZipCode::new(" 123456").is_err());
    }
}
