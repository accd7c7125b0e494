//! Error types for the address book.
//!
//! Validation failures live in [`crate::domain::ValidationError`]; this
//! module holds the errors raised while loading configuration.

use thiserror::Error;

pub use crate::domain::ValidationError;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactField;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            var: "MAX_MATCH_RESULTS".to_string(),
            reason: "Must be a positive number, got: ten".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for MAX_MATCH_RESULTS: Must be a positive number, got: ten"
        );

        let err = ConfigError::DotenvError("line 3".to_string());
        assert_eq!(err.to_string(), "Failed to load .env file: line 3");
    }

    #[test]
    fn test_validation_error_names_field() {
        let err = ValidationError::new(ContactField::Phone, "bad", "123");
        assert!(err.to_string().contains("phone"));
    }
}
