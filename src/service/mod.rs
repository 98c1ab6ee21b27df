// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the typed accessor pipeline.
//!
//! This module wraps caller-supplied raw getters and setters with default-value
//! logging, composable validation, and type-specific conveniences. It holds no state
//! of its own: every call works only on its arguments.

pub mod accessor;
pub mod assertions;

// Re-export commonly used types
pub use accessor::{
    get, get_boolean, get_file, get_int, get_int_from_long, get_long, get_size_in_bytes,
    get_socket_addr, get_string, get_time_duration, set, set_boolean, set_file, set_int, set_long,
    set_size_in_bytes, set_string, set_time_duration, ValueSource,
};
pub use assertions::{
    require_int, require_max, require_min, require_non_negative_size,
    require_non_negative_time_duration, Assertion,
};
