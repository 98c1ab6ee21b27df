// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) for the collaborators the
//! accessor layer depends on but does not implement: the raw key-value store, the
//! address resolver, and the sink that receives introspection output. Adapters in
//! the adapters layer provide implementations.

pub mod accessor;
pub mod resolver;
pub mod sink;

// Re-export commonly used types
pub use accessor::{RawGetter, RawSetter};
pub use resolver::AddressResolver;
pub use sink::{Indented, LineSink};
