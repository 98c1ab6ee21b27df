// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the error type, the semantic value types that sit on top
//! of raw stored text (byte sizes and durations), and the conversions between them.
//! It is independent of any particular backing store.

pub mod errors;
pub mod size_in_bytes;
pub mod stored_value;
pub mod time_duration;

// Re-export commonly used types
pub use errors::{ConfigError, Result};
pub use size_in_bytes::SizeInBytes;
pub use stored_value::StoredValue;
pub use time_duration::{TimeDuration, TimeUnit};
