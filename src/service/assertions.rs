// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reusable validation predicates.
//!
//! Each factory returns a capability rather than a boolean, so it can be passed
//! positionally in the assertion list of any accessor call:
//!
//! ```rust
//! use typedcfg::service::assertions::{require_max, require_min};
//! use typedcfg::service::get_int;
//! use typedcfg::domain::Result;
//!
//! let getter = |_key: &str, default: i32| -> Result<i32> { Ok(default) };
//! let port = get_int(&getter, "raft.server.port", 9000, &[&require_min(1), &require_max(65535)])
//!     .unwrap();
//! assert_eq!(port, 9000);
//! ```

use crate::domain::{ConfigError, Result, SizeInBytes, TimeDuration};
use std::fmt;

/// A validation predicate over a key and its resolved value.
///
/// Succeeds silently or returns a [`ConfigError::Validation`]. Any closure of the
/// shape `Fn(&str, &T) -> Result<()>` is an `Assertion<T>`.
pub trait Assertion<T: ?Sized> {
    /// Checks `value`, which was read from or is about to be written to `key`.
    fn check(&self, key: &str, value: &T) -> Result<()>;
}

impl<T, F> Assertion<T> for F
where
    T: ?Sized,
    F: Fn(&str, &T) -> Result<()>,
{
    fn check(&self, key: &str, value: &T) -> Result<()> {
        self(key, value)
    }
}

/// Applies `assertions` in order, stopping at the first failure.
pub(crate) fn apply<T: ?Sized>(key: &str, value: &T, assertions: &[&dyn Assertion<T>]) -> Result<()> {
    assertions
        .iter()
        .try_for_each(|assertion| assertion.check(key, value))
}

/// Requires the value to be at least `min`.
pub fn require_min<T>(min: T) -> impl Fn(&str, &T) -> Result<()> + Clone + Send + Sync
where
    T: PartialOrd + fmt::Display + Copy + Send + Sync,
{
    move |key: &str, value: &T| {
        if *value < min {
            return Err(ConfigError::validation(key, value, format!("< min = {}", min)));
        }
        Ok(())
    }
}

/// Requires the value to be at most `max`.
pub fn require_max<T>(max: T) -> impl Fn(&str, &T) -> Result<()> + Clone + Send + Sync
where
    T: PartialOrd + fmt::Display + Copy + Send + Sync,
{
    move |key: &str, value: &T| {
        if *value > max {
            return Err(ConfigError::validation(key, value, format!("> max = {}", max)));
        }
        Ok(())
    }
}

/// Requires a duration not to be negative.
pub fn require_non_negative_time_duration(
) -> impl Fn(&str, &TimeDuration) -> Result<()> + Clone + Send + Sync {
    |key: &str, value: &TimeDuration| {
        if value.is_negative() {
            return Err(ConfigError::validation(key, value, "is negative."));
        }
        Ok(())
    }
}

/// Requires a size to resolve to zero or more bytes.
pub fn require_non_negative_size() -> impl Fn(&str, &SizeInBytes) -> Result<()> + Clone + Send + Sync
{
    |key: &str, value: &SizeInBytes| require_min(0i64)(key, &value.size())
}

/// Narrows a 64-bit value to 32 bits.
///
/// Values outside the `i32` range are a validation failure referencing `key` and
/// the original value; nothing is ever truncated.
///
/// # Examples
///
/// ```rust
/// use typedcfg::service::assertions::require_int;
///
/// assert_eq!(require_int("raft.log.purge.gap", 1024).unwrap(), 1024);
/// assert!(require_int("raft.log.purge.gap", i64::MAX).is_err());
/// ```
pub fn require_int(key: &str, value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|e| ConfigError::from_try_from_int_error(key, value, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimeUnit;
    use std::cell::Cell;

    #[test]
    fn test_require_min() {
        let min = require_min(5);
        assert!(min("k", &5).is_ok());
        assert!(min("k", &6).is_ok());
        let err = min("k", &4).unwrap_err();
        assert_eq!(err.to_string(), "k = 4 < min = 5");
    }

    #[test]
    fn test_require_max_long() {
        let max = require_max(10i64);
        assert!(max("k", &10).is_ok());
        let err = max("k", &11).unwrap_err();
        assert_eq!(err.to_string(), "k = 11 > max = 10");
    }

    #[test]
    fn test_apply_stops_at_first_failure() {
        let evaluated = Cell::new(false);
        let never = |_key: &str, _value: &i32| -> Result<()> {
            evaluated.set(true);
            Ok(())
        };
        let min = require_min(5i32);
        let max = require_max(1i32);

        let err = apply("k", &10, &[&min, &max, &never]).unwrap_err();
        assert_eq!(err.to_string(), "k = 10 > max = 1");
        assert!(!evaluated.get());
    }

    #[test]
    fn test_apply_empty() {
        assert!(apply::<i32>("k", &0, &[]).is_ok());
    }

    #[test]
    fn test_non_negative_duration() {
        let check = require_non_negative_time_duration();
        assert!(check("k", &TimeDuration::new(0, TimeUnit::Seconds)).is_ok());
        let err = check("k", &TimeDuration::new(-3, TimeUnit::Seconds)).unwrap_err();
        assert_eq!(err.to_string(), "k = -3s is negative.");
    }

    #[test]
    fn test_non_negative_size() {
        let check = require_non_negative_size();
        assert!(check("k", &SizeInBytes::from(0)).is_ok());
        let err = check("k", &SizeInBytes::from(-1)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "k = -1 < min = 0");
    }

    #[test]
    fn test_require_int_bounds() {
        assert_eq!(require_int("k", i32::MAX as i64).unwrap(), i32::MAX);
        assert_eq!(require_int("k", i32::MIN as i64).unwrap(), i32::MIN);
        assert!(require_int("k", i32::MAX as i64 + 1).unwrap_err().is_validation());
        assert!(require_int("k", i32::MIN as i64 - 1).is_err());
    }
}
