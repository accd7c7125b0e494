//! Domain validation errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The contact fields, in the order they are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    FirstName,
    LastName,
    Address,
    City,
    State,
    Zip,
    Phone,
    Email,
}

impl ContactField {
    /// All fields in validation order.
    pub const ALL: [ContactField; 8] = [
        Self::FirstName,
        Self::LastName,
        Self::Address,
        Self::City,
        Self::State,
        Self::Zip,
        Self::Phone,
        Self::Email,
    ];

    /// Field name as it appears in serialized contacts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::Zip => "zip",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field value that failed validation.
///
/// Carries the offending field, the rule it broke and the rejected value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field}: {rule} (got {value:?})")]
pub struct ValidationError {
    pub field: ContactField,
    pub rule: &'static str,
    pub value: String,
}

impl ValidationError {
    pub fn new(field: ContactField, rule: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            rule,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(ContactField::Zip, "must be 6 digits", "12345");
        assert_eq!(
            err.to_string(),
            "Invalid zip: must be 6 digits (got \"12345\")"
        );
    }

    #[test]
    fn test_field_names() {
        let names: Vec<&str> = ContactField::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(
            names,
            vec!["firstName", "lastName", "address", "city", "state", "zip", "phone", "email"]
        );
    }

    #[test]
    fn test_field_serialization() {
        let json = serde_json::to_string(&ContactField::FirstName).unwrap();
        assert_eq!(json, "\"firstName\"");
    }
}
