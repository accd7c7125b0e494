//! Configuration management for the address book binary.
//!
//! This module loads settings from environment variables, reading a `.env`
//! file first when one exists. The library itself never reads the
//! environment; callers pass a [`Config`] or its parts explicitly.

use crate::error::{ConfigError, ConfigResult};
use crate::matching::fuzzy_matcher::{DEFAULT_MAX_RESULTS, DEFAULT_MIN_CONFIDENCE};
use crate::matching::ContactMatcher;
use std::env;
use std::path::Path;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of fuzzy search results to return (default: 5)
    pub max_match_results: usize,

    /// Fuzzy match confidence threshold (0-100, default: 30)
    pub match_confidence_threshold: u8,

    /// Log level used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `MAX_MATCH_RESULTS`: Max fuzzy search results (default: 5)
    /// - `MATCH_CONFIDENCE_THRESHOLD`: Min confidence score (default: 30)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        Self::check_dotenv(dotenvy::dotenv().map(|_| ()))?;
        Self::from_vars()
    }

    /// Like [`Config::from_env`], reading the given env file instead of `.env`.
    pub fn from_env_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Self::check_dotenv(dotenvy::from_path(path))?;
        Self::from_vars()
    }

    /// A missing env file is fine; a malformed one is not.
    fn check_dotenv(result: Result<(), dotenvy::Error>) -> ConfigResult<()> {
        match result {
            Ok(()) => Ok(()),
            Err(e) if e.not_found() => Ok(()),
            Err(e) => Err(ConfigError::DotenvError(e.to_string())),
        }
    }

    /// Read the variables already present in the process environment.
    fn from_vars() -> ConfigResult<Self> {
        let max_match_results = Self::parse_env_usize("MAX_MATCH_RESULTS", DEFAULT_MAX_RESULTS)?;
        let match_confidence_threshold =
            Self::parse_env_u8("MATCH_CONFIDENCE_THRESHOLD", DEFAULT_MIN_CONFIDENCE)?;

        // Validate confidence threshold is 0-100
        if match_confidence_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "MATCH_CONFIDENCE_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            max_match_results,
            match_confidence_threshold,
            log_level,
        })
    }

    /// Build a matcher using the configured limits.
    pub fn matcher(&self) -> ContactMatcher {
        ContactMatcher::new(self.max_match_results, self.match_confidence_threshold)
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_match_results: DEFAULT_MAX_RESULTS,
            match_confidence_threshold: DEFAULT_MIN_CONFIDENCE,
            log_level: "info".to_string(),
        }
    }
}
