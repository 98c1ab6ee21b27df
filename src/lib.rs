// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed, validated configuration accessors over a raw key-value store.
//!
//! This crate sits above an untyped configuration store, one that can only answer
//! "the value for key K, or this default" and "store V under K", and adds three
//! things on top of it:
//!
//! - conversion between raw stored text and richer types (byte sizes, durations,
//!   file paths, socket addresses);
//! - validation at the moment a value is read or written, failing fast with a
//!   descriptive error instead of letting an invalid value propagate;
//! - a convention-based dump that documents a configuration-holding type's declared
//!   keys, defaults and constants.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: errors and value types (`SizeInBytes`, `TimeDuration`, `StoredValue`)
//! - **Ports**: traits for external collaborators (`RawGetter`, `RawSetter`,
//!   `AddressResolver`, `LineSink`)
//! - **Service**: the typed accessor pipeline and its assertions
//! - **Introspection**: configuration surface descriptors and the dump printer
//! - **Adapters**: an in-memory store, a system address resolver, a stdout sink
//!
//! # Feature Flags
//!
//! - `memory`: Enable the in-memory `MemoryStore` adapter (default)
//!
//! # Quick Start
//!
//! ```rust
//! use typedcfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let store = MemoryStore::new();
//! set_size_in_bytes(&store, "raft.log.segment.size", &SizeInBytes::parse("16MB")?, &[])?;
//!
//! let segment = get_size_in_bytes(&store, "raft.log.segment.size", SizeInBytes::from(0), &[])?;
//! assert_eq!(segment.size(), 16 << 20);
//!
//! let retries = get_int(&store, "raft.client.retries", 3, &[&require_min(0), &require_max(10)])?;
//! assert_eq!(retries, 3);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod introspect;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{ConfigError, Result, SizeInBytes, StoredValue, TimeDuration, TimeUnit};
    pub use crate::introspect::{print_all, print_all_to, ConfigSurface, Introspect};
    pub use crate::ports::{AddressResolver, LineSink, RawGetter, RawSetter};
    pub use crate::service::{
        get, get_boolean, get_file, get_int, get_int_from_long, get_long, get_size_in_bytes,
        get_socket_addr, get_string, get_time_duration, require_int, require_max, require_min,
        require_non_negative_size, require_non_negative_time_duration, set, set_boolean,
        set_file, set_int, set_long, set_size_in_bytes, set_string, set_time_duration,
        Assertion,
    };

    // Re-export adapters based on feature flags
    #[cfg(feature = "memory")]
    pub use crate::adapters::MemoryStore;
    pub use crate::adapters::{StdoutSink, SystemResolver};
}
