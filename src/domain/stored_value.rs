// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversions between typed values and their raw stored text.
//!
//! A raw key-value store only holds strings. The [`StoredValue`] trait describes how
//! each supported type is read back from, and written out to, that textual form.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::{SizeInBytes, TimeDuration, TimeUnit};
use std::path::PathBuf;

/// A type that can be stored as text in a raw key-value store.
///
/// # Examples
///
/// ```
/// use typedcfg::domain::StoredValue;
///
/// assert_eq!(bool::from_stored("test.key", "yes").unwrap(), true);
/// assert_eq!(42i32.to_stored(), "42");
/// ```
pub trait StoredValue: Sized {
    /// Converts stored text into a value, reporting failures against `key`.
    fn from_stored(key: &str, text: &str) -> Result<Self>;

    /// Renders the value in the form it should be stored in.
    fn to_stored(&self) -> String;
}

/// Recognizes the following values (case-insensitive):
/// - `true`: "true", "yes", "1", "on"
/// - `false`: "false", "no", "0", "off"
impl StoredValue for bool {
    fn from_stored(key: &str, text: &str) -> Result<Self> {
        match text.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => text
                .parse::<bool>()
                .map_err(|e| ConfigError::from_parse_bool_error(key.to_string(), e)),
        }
    }

    fn to_stored(&self) -> String {
        self.to_string()
    }
}

impl StoredValue for i32 {
    fn from_stored(key: &str, text: &str) -> Result<Self> {
        text.trim()
            .parse::<i32>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    fn to_stored(&self) -> String {
        self.to_string()
    }
}

impl StoredValue for i64 {
    fn from_stored(key: &str, text: &str) -> Result<Self> {
        text.trim()
            .parse::<i64>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    fn to_stored(&self) -> String {
        self.to_string()
    }
}

impl StoredValue for String {
    fn from_stored(_key: &str, text: &str) -> Result<Self> {
        Ok(text.to_string())
    }

    fn to_stored(&self) -> String {
        self.clone()
    }
}

impl StoredValue for PathBuf {
    fn from_stored(_key: &str, text: &str) -> Result<Self> {
        Ok(PathBuf::from(text.trim()))
    }

    fn to_stored(&self) -> String {
        self.to_string_lossy().into_owned()
    }
}

impl StoredValue for SizeInBytes {
    fn from_stored(key: &str, text: &str) -> Result<Self> {
        SizeInBytes::parse(text).map_err(|e| conversion_error::<Self>(key, e))
    }

    fn to_stored(&self) -> String {
        self.input().to_string()
    }
}

/// Bare numbers are read as milliseconds.
impl StoredValue for TimeDuration {
    fn from_stored(key: &str, text: &str) -> Result<Self> {
        TimeDuration::parse(text, TimeUnit::Milliseconds).map_err(|e| conversion_error::<Self>(key, e))
    }

    fn to_stored(&self) -> String {
        self.to_string()
    }
}

fn conversion_error<T>(key: &str, err: ConfigError) -> ConfigError {
    ConfigError::TypeConversionError {
        key: key.to_string(),
        target_type: crate::introspect::short_type_name::<T>(),
        source: Box::new(err),
    }
}
