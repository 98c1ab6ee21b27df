// SPDX-License-Identifier: MIT OR Apache-2.0

//! Convention-based configuration dumps.
//!
//! A type describes its declared fields through [`Introspect`], and [`print_all`]
//! renders them as documentation. Fields are paired by name alone:
//!
//! - `FOO_KEY` with `FOO_DEFAULT` prints `key: <key> (<type>, default=<default>)`
//! - `FOO_PARAMETER` with `FOO_CLASS` prints `parameter: <parameter> (<class>)`
//! - anything else prints `constant: <name> = <value>`

pub mod printer;
pub mod surface;

// Re-export commonly used types
pub use printer::{print_all, print_all_to};
pub use surface::{
    short_type_name, ConfigSurface, ConfigSurfaceBuilder, Documented, FieldAccess,
    FieldDescriptor, FieldScope, FieldValue, Introspect,
};
