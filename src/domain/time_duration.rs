// SPDX-License-Identifier: MIT OR Apache-2.0

//! Signed time durations with an explicit unit.
//!
//! `std::time::Duration` cannot be negative, but a configured duration can be, and the
//! accessor layer must be able to see such a value in order to reject it. A
//! [`TimeDuration`] is therefore an `i64` amount paired with a [`TimeUnit`].

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// The unit of a [`TimeDuration`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Nanoseconds
    Nanoseconds,
    /// Microseconds
    Microseconds,
    /// Milliseconds
    Milliseconds,
    /// Seconds
    Seconds,
    /// Minutes
    Minutes,
    /// Hours
    Hours,
    /// Days
    Days,
}

impl TimeUnit {
    /// All units, finest first.
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Nanoseconds,
        TimeUnit::Microseconds,
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
    ];

    /// Returns the short symbol used when rendering a duration.
    pub fn abbreviation(self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "us",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "min",
            TimeUnit::Hours => "h",
            TimeUnit::Days => "d",
        }
    }

    /// Returns the number of nanoseconds in one of this unit.
    pub fn nanos(self) -> i128 {
        match self {
            TimeUnit::Nanoseconds => 1,
            TimeUnit::Microseconds => 1_000,
            TimeUnit::Milliseconds => 1_000_000,
            TimeUnit::Seconds => 1_000_000_000,
            TimeUnit::Minutes => 60 * 1_000_000_000,
            TimeUnit::Hours => 3_600 * 1_000_000_000,
            TimeUnit::Days => 86_400 * 1_000_000_000,
        }
    }

    fn symbols(self) -> &'static [&'static str] {
        match self {
            TimeUnit::Nanoseconds => &["ns", "nanos", "nanosecond", "nanoseconds"],
            TimeUnit::Microseconds => &["us", "μs", "micros", "microsecond", "microseconds"],
            TimeUnit::Milliseconds => &["ms", "millis", "millisecond", "milliseconds"],
            TimeUnit::Seconds => &["s", "sec", "secs", "second", "seconds"],
            TimeUnit::Minutes => &["m", "min", "mins", "minute", "minutes"],
            TimeUnit::Hours => &["h", "hr", "hrs", "hour", "hours"],
            TimeUnit::Days => &["d", "day", "days"],
        }
    }

    /// Looks up a unit by one of its symbols, case-insensitively.
    pub fn from_symbol(symbol: &str) -> Option<TimeUnit> {
        let symbol = symbol.trim().to_lowercase();
        TimeUnit::ALL
            .into_iter()
            .find(|unit| unit.symbols().contains(&symbol.as_str()))
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// A signed amount of time in a given unit.
///
/// # Examples
///
/// ```
/// use typedcfg::domain::{TimeDuration, TimeUnit};
///
/// let timeout = TimeDuration::parse("150ms", TimeUnit::Milliseconds).unwrap();
/// assert_eq!(timeout.duration(), 150);
/// assert_eq!(timeout.unit(), TimeUnit::Milliseconds);
/// assert!(!timeout.is_negative());
///
/// let bogus = TimeDuration::parse("-5s", TimeUnit::Milliseconds).unwrap();
/// assert!(bogus.is_negative());
/// assert_eq!(bogus.to_string(), "-5s");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TimeDuration {
    duration: i64,
    unit: TimeUnit,
}

impl TimeDuration {
    /// Creates a duration of `duration` units.
    pub const fn new(duration: i64, unit: TimeUnit) -> Self {
        Self { duration, unit }
    }

    /// Parses a duration such as `"10s"`, `"-5ms"`, `"3 minutes"` or `"1h 30min"`.
    ///
    /// A bare number is interpreted in `default_unit`. Compound forms are accepted
    /// only when non-negative and are normalized to the coarsest exact unit.
    pub fn parse(text: &str, default_unit: TimeUnit) -> Result<Self> {
        let trimmed = text.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, trimmed),
        };

        let split = body
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(body.len());
        let (digits, symbol) = body.split_at(split);

        if !digits.is_empty() {
            let unit = if symbol.trim().is_empty() {
                Some(default_unit)
            } else {
                TimeUnit::from_symbol(symbol)
            };
            if let Some(unit) = unit {
                let amount = digits
                    .parse::<i64>()
                    .map_err(|e| invalid(text, Some(Box::new(e))))?;
                let duration = if negative { -amount } else { amount };
                return Ok(Self::new(duration, unit));
            }
        }

        if negative {
            return Err(invalid(text, None));
        }
        let std_duration =
            humantime::parse_duration(body).map_err(|e| invalid(text, Some(Box::new(e))))?;
        Self::try_from(std_duration).map_err(|_| invalid(text, None))
    }

    /// Returns the amount, in [`TimeDuration::unit`]s.
    pub fn duration(&self) -> i64 {
        self.duration
    }

    /// Returns the unit of this duration.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Returns `true` if this duration is below zero.
    pub fn is_negative(&self) -> bool {
        self.duration < 0
    }

    /// Returns the duration in nanoseconds.
    pub fn as_nanos(&self) -> i128 {
        self.duration as i128 * self.unit.nanos()
    }

    /// Converts to `target`, truncating toward zero. Returns `None` on overflow.
    pub fn to_unit(&self, target: TimeUnit) -> Option<i64> {
        i64::try_from(self.as_nanos() / target.nanos()).ok()
    }

    /// Converts to a `std::time::Duration`. Returns `None` for negative durations.
    pub fn to_std(&self) -> Option<Duration> {
        let nanos = u128::try_from(self.as_nanos()).ok()?;
        let secs = u64::try_from(nanos / 1_000_000_000).ok()?;
        Some(Duration::new(secs, (nanos % 1_000_000_000) as u32))
    }
}

fn invalid(text: &str, source: Option<Box<dyn std::error::Error + Send + Sync>>) -> ConfigError {
    ConfigError::ParseError {
        message: format!("Invalid time duration '{}'", text),
        source,
    }
}

impl TryFrom<Duration> for TimeDuration {
    type Error = std::num::TryFromIntError;

    fn try_from(value: Duration) -> std::result::Result<Self, Self::Error> {
        let nanos = value.as_nanos() as i128;
        let unit = TimeUnit::ALL
            .into_iter()
            .rev()
            .find(|unit| nanos % unit.nanos() == 0)
            .unwrap_or(TimeUnit::Nanoseconds);
        let duration = i64::try_from(nanos / unit.nanos())?;
        Ok(Self::new(duration, unit))
    }
}

/// Two durations are equal when they span the same amount of time.
impl PartialEq for TimeDuration {
    fn eq(&self, other: &Self) -> bool {
        self.as_nanos() == other.as_nanos()
    }
}

impl Eq for TimeDuration {}

impl fmt::Display for TimeDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.duration, self.unit.abbreviation())
    }
}

impl Serialize for TimeDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text, TimeUnit::Milliseconds).map_err(serde::de::Error::custom)
    }
}
