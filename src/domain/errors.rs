// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the typed accessor layer.
//!
//! This module defines the errors raised while reading, validating, converting, or
//! storing configuration values. All errors use `thiserror` for proper error handling
//! and conversion.

use std::num::{ParseIntError, TryFromIntError};
use std::str::ParseBoolError;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// Validation failures are fail-fast: the accessor pipeline returns them as soon as
/// the first assertion fails and never downgrades them to a log line. It is marked
/// as `#[non_exhaustive]` to allow for future additions without breaking backwards
/// compatibility.
///
/// # Examples
///
/// ```
/// use typedcfg::domain::errors::ConfigError;
///
/// let error = ConfigError::validation("raft.server.port", &-1, "< min = 0");
/// assert_eq!(error.to_string(), "raft.server.port = -1 < min = 0");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A value violated one of the assertions applied to it.
    #[error("{key} = {value} {constraint}")]
    Validation {
        /// The key whose value is invalid
        key: String,
        /// The offending value, rendered as text
        value: String,
        /// Description of the violated constraint
        constraint: String,
        /// The underlying error, if the violation was detected by a failed conversion
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A configured address could not be resolved into a socket address.
    #[error("Failed to resolve address '{address}' for key '{key}': {source}")]
    AddressResolution {
        /// The key the address was read from
        key: String,
        /// The address text that failed to resolve
        address: String,
        /// The underlying resolution error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to convert a stored value to the requested type.
    #[error(
        "Failed to convert configuration value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An error occurred in the backing store.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the store that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse a size or duration from its textual form.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while resolving or reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a validation failure for `key = value` violating `constraint`.
    pub fn validation(
        key: impl Into<String>,
        value: &dyn std::fmt::Display,
        constraint: impl Into<String>,
    ) -> Self {
        ConfigError::Validation {
            key: key.into(),
            value: value.to_string(),
            constraint: constraint.into(),
            source: None,
        }
    }

    /// Creates a validation failure for a narrowing conversion that overflowed.
    pub fn from_try_from_int_error(key: &str, value: i64, err: TryFromIntError) -> Self {
        ConfigError::Validation {
            key: key.to_string(),
            value: value.to_string(),
            constraint: "does not fit in a 32-bit integer".to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseBoolError.
    pub fn from_parse_bool_error(key: String, err: ParseBoolError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "boolean".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a ParseError without an underlying cause.
    pub fn parse(message: impl Into<String>) -> Self {
        ConfigError::ParseError {
            message: message.into(),
            source: None,
        }
    }

    /// Returns `true` if this is a validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, ConfigError::Validation { .. })
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_validation_error_display() {
        let error = ConfigError::validation("test.key", &10, "> max = 1");
        assert_eq!(error.to_string(), "test.key = 10 > max = 1");
        assert!(error.is_validation());
        assert!(error.source().is_none());
    }

    #[test]
    fn test_narrowing_error_keeps_source() {
        let err = i32::try_from(i64::MAX).unwrap_err();
        let error = ConfigError::from_try_from_int_error("test.key", i64::MAX, err);
        assert!(error.is_validation());
        assert!(error.to_string().contains("test.key"));
        assert!(error.to_string().contains(&i64::MAX.to_string()));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_type_conversion_error() {
        let parse_err = "not_a_number".parse::<i32>().unwrap_err();
        let error = ConfigError::from_parse_int_error("test.key".to_string(), parse_err);
        assert!(matches!(error, ConfigError::TypeConversionError { .. }));
        assert!(error.to_string().contains("integer"));
        assert!(!error.is_validation());
    }

    #[test]
    fn test_from_parse_bool_error() {
        let parse_err = "not_a_bool".parse::<bool>().unwrap_err();
        let error = ConfigError::from_parse_bool_error("test.key".to_string(), parse_err);
        assert!(error.to_string().contains("boolean"));
    }

    #[test]
    fn test_source_error() {
        let error = ConfigError::SourceError {
            source_name: "memory".to_string(),
            message: "lock poisoned".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Configuration source 'memory' error: lock poisoned"
        );
    }

    #[test]
    fn test_parse_error() {
        let error = ConfigError::parse("Invalid size '12q'");
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration: Invalid size '12q'"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such host");
        let error = ConfigError::from(io_error);
        assert!(matches!(error, ConfigError::IoError(_)));
    }
}
