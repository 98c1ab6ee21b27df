// SPDX-License-Identifier: MIT OR Apache-2.0

//! Address resolver backed by the standard library.

use crate::domain::{ConfigError, Result};
use crate::ports::AddressResolver;
use std::net::{SocketAddr, ToSocketAddrs};

/// Resolves `"host:port"` text with [`ToSocketAddrs`], taking the first address.
///
/// Literal IP addresses are parsed without any lookup; hostnames go through the
/// system resolver.
///
/// # Examples
///
/// ```rust
/// use typedcfg::adapters::SystemResolver;
/// use typedcfg::ports::AddressResolver;
///
/// let addr = SystemResolver.resolve("127.0.0.1:9872").unwrap();
/// assert_eq!(addr.port(), 9872);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemResolver;

impl AddressResolver for SystemResolver {
    fn resolve(&self, address: &str) -> Result<SocketAddr> {
        let trimmed = address.trim();
        if let Ok(addr) = trimmed.parse::<SocketAddr>() {
            return Ok(addr);
        }

        let mut addrs = trimmed.to_socket_addrs()?;
        addrs.next().ok_or_else(|| ConfigError::ParseError {
            message: format!("No address found for '{}'", trimmed),
            source: None,
        })
    }
}
