// SPDX-License-Identifier: MIT OR Apache-2.0

//! Byte sizes with human-readable binary suffixes.
//!
//! A [`SizeInBytes`] keeps both the resolved byte count and the text it was parsed
//! from, so a value read as `"10MB"` is written back as `"10MB"` rather than as
//! `10485760`.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Binary prefixes in increasing order; the n-th entry multiplies by `2^(10 * (n + 1))`.
const PREFIXES: [char; 6] = ['k', 'm', 'g', 't', 'p', 'e'];

/// A size in bytes together with its original textual form.
///
/// Sizes are signed so that a configured negative value can be represented and then
/// rejected by validation instead of failing at parse time.
///
/// # Examples
///
/// ```
/// use typedcfg::domain::SizeInBytes;
///
/// let size = SizeInBytes::parse("10MB").unwrap();
/// assert_eq!(size.size(), 10 * 1024 * 1024);
/// assert_eq!(size.input(), "10MB");
/// assert_eq!(size.to_string(), "10MB");
/// ```
#[derive(Clone, Debug)]
pub struct SizeInBytes {
    size: i64,
    input: String,
}

impl SizeInBytes {
    /// Parses a size such as `"1024"`, `"4k"`, `"10MB"` or `"-1"`.
    ///
    /// Prefixes are binary (`k` = 1024) and case-insensitive; a trailing `b`/`B`
    /// is optional.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let lower = trimmed.to_ascii_lowercase();
        let without_b = lower.strip_suffix('b').unwrap_or(&lower);

        let (digits, shift) = match without_b.chars().last() {
            Some(c) if c.is_ascii_alphabetic() => {
                let index = PREFIXES
                    .iter()
                    .position(|p| *p == c)
                    .ok_or_else(|| invalid(input, None))?;
                (&without_b[..without_b.len() - 1], 10 * (index as u32 + 1))
            }
            _ => (without_b, 0),
        };

        let base = digits
            .trim()
            .parse::<i64>()
            .map_err(|e| invalid(input, Some(Box::new(e))))?;
        let size = base
            .checked_mul(1i64 << shift)
            .ok_or_else(|| invalid(input, None))?;

        Ok(Self {
            size,
            input: trimmed.to_string(),
        })
    }

    /// Returns the resolved number of bytes.
    pub fn size(&self) -> i64 {
        self.size
    }

    /// Returns the text this size was created from.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns `true` if the resolved size is below zero.
    pub fn is_negative(&self) -> bool {
        self.size < 0
    }
}

fn invalid(input: &str, source: Option<Box<dyn std::error::Error + Send + Sync>>) -> ConfigError {
    ConfigError::ParseError {
        message: format!("Invalid size in bytes '{}'", input),
        source,
    }
}

impl From<i64> for SizeInBytes {
    fn from(size: i64) -> Self {
        Self {
            size,
            input: size.to_string(),
        }
    }
}

impl FromStr for SizeInBytes {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Two sizes are equal when they resolve to the same number of bytes.
impl PartialEq for SizeInBytes {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
    }
}

impl Eq for SizeInBytes {}

impl fmt::Display for SizeInBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.input)
    }
}

impl Serialize for SizeInBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.input)
    }
}

impl<'de> Deserialize<'de> for SizeInBytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        let size = SizeInBytes::parse("1024").unwrap();
        assert_eq!(size.size(), 1024);
        assert_eq!(size.input(), "1024");
    }

    #[test]
    fn test_parse_suffixes() {
        assert_eq!(SizeInBytes::parse("4k").unwrap().size(), 4096);
        assert_eq!(SizeInBytes::parse("4KB").unwrap().size(), 4096);
        assert_eq!(SizeInBytes::parse("10MB").unwrap().size(), 10 * 1024 * 1024);
        assert_eq!(SizeInBytes::parse("2g").unwrap().size(), 2 << 30);
        assert_eq!(SizeInBytes::parse("1t").unwrap().size(), 1 << 40);
        assert_eq!(SizeInBytes::parse("1E").unwrap().size(), 1 << 60);
        assert_eq!(SizeInBytes::parse("100b").unwrap().size(), 100);
    }

    #[test]
    fn test_parse_keeps_original_input() {
        let size = SizeInBytes::parse(" 8mb ").unwrap();
        assert_eq!(size.input(), "8mb");
        assert_eq!(size.to_string(), "8mb");
    }

    #[test]
    fn test_parse_negative() {
        let size = SizeInBytes::parse("-1").unwrap();
        assert_eq!(size.size(), -1);
        assert!(size.is_negative());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(SizeInBytes::parse("").is_err());
        assert!(SizeInBytes::parse("abc").is_err());
        assert!(SizeInBytes::parse("12q").is_err());
        assert!(SizeInBytes::parse("1.5m").is_err());
    }

    #[test]
    fn test_parse_overflow() {
        let result = SizeInBytes::parse("9000000000000e");
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_from_i64() {
        let size = SizeInBytes::from(4096);
        assert_eq!(size.size(), 4096);
        assert_eq!(size.input(), "4096");
    }

    #[test]
    fn test_equality_by_size() {
        assert_eq!(
            SizeInBytes::parse("1k").unwrap(),
            SizeInBytes::parse("1024").unwrap()
        );
        assert_ne!(SizeInBytes::from(1), SizeInBytes::from(2));
    }

    #[test]
    fn test_serde_uses_input_text() {
        let size = SizeInBytes::parse("64KB").unwrap();
        let yaml = serde_yaml::to_string(&size).unwrap();
        assert_eq!(yaml.trim(), "64KB");

        let back: SizeInBytes = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.size(), 64 * 1024);
        assert_eq!(back.input(), "64KB");
    }
}
