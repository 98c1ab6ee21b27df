// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing implementations of the ports.
//!
//! This module contains concrete implementations of the traits defined in the ports
//! layer: a raw store, an address resolver, and an output sink.

#[cfg(feature = "memory")]
pub mod memory;
pub mod resolver;
pub mod stdout;

// Re-export adapters based on feature flags
#[cfg(feature = "memory")]
pub use memory::MemoryStore;
pub use resolver::SystemResolver;
pub use stdout::StdoutSink;
