// SPDX-License-Identifier: MIT OR Apache-2.0

//! Address resolution trait definition.
//!
//! Turning `"host:port"` text into a socket address involves hostname parsing and DNS
//! or interface lookups. That work is delegated through this port rather than done by
//! the accessor pipeline itself.

use crate::domain::Result;
use std::net::SocketAddr;

/// Resolves address text into a bindable or connectable endpoint.
///
/// Implementations must be `Send + Sync` so one resolver can be shared by every
/// thread that loads configuration.
///
/// # Examples
///
/// ```rust
/// use std::net::SocketAddr;
/// use typedcfg::domain::{ConfigError, Result};
/// use typedcfg::ports::AddressResolver;
///
/// struct LiteralOnly;
///
/// impl AddressResolver for LiteralOnly {
///     fn resolve(&self, address: &str) -> Result<SocketAddr> {
///         address.parse().map_err(|e| ConfigError::ParseError {
///             message: format!("not a socket address: {}", address),
///             source: Some(Box::new(e)),
///         })
///     }
/// }
///
/// let addr = LiteralOnly.resolve("127.0.0.1:6000").unwrap();
/// assert_eq!(addr.port(), 6000);
/// ```
pub trait AddressResolver: Send + Sync {
    /// Resolves `address` into a socket address.
    fn resolve(&self, address: &str) -> Result<SocketAddr>;
}
