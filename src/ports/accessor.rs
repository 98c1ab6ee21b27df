// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw accessor trait definitions.
//!
//! This module defines the ports through which the typed accessor pipeline reaches
//! the external key-value store. The pipeline never owns a store; callers hand it a
//! getter or setter bound to whatever store they use.

use crate::domain::Result;

/// Reads a raw value of type `T` from a backing store.
///
/// The store decides between the configured value and `default`: if `key` is set, its
/// value is returned, otherwise `default` is. Any closure of the shape
/// `Fn(&str, T) -> Result<T>` is a `RawGetter<T>`.
///
/// # Examples
///
/// ```rust
/// use typedcfg::ports::RawGetter;
/// use typedcfg::domain::Result;
///
/// let getter = |key: &str, default: i32| -> Result<i32> {
///     Ok(if key == "raft.server.port" { 9000 } else { default })
/// };
///
/// assert_eq!(getter.get_raw("raft.server.port", 0).unwrap(), 9000);
/// assert_eq!(getter.get_raw("raft.client.port", 7).unwrap(), 7);
/// ```
pub trait RawGetter<T> {
    /// Returns the value stored under `key`, or `default` if there is none.
    fn get_raw(&self, key: &str, default: T) -> Result<T>;
}

impl<T, F> RawGetter<T> for F
where
    F: Fn(&str, T) -> Result<T>,
{
    fn get_raw(&self, key: &str, default: T) -> Result<T> {
        self(key, default)
    }
}

/// Writes a raw value of type `T` into a backing store.
///
/// Any closure of the shape `Fn(&str, &T) -> Result<()>` is a `RawSetter<T>`.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use typedcfg::ports::RawSetter;
/// use typedcfg::domain::Result;
///
/// let stored = RefCell::new(Vec::new());
/// let setter = |key: &str, value: &bool| -> Result<()> {
///     stored.borrow_mut().push(format!("{}={}", key, value));
///     Ok(())
/// };
///
/// setter.set_raw("raft.server.leader.election.enabled", &true).unwrap();
/// assert_eq!(stored.borrow()[0], "raft.server.leader.election.enabled=true");
/// ```
pub trait RawSetter<T: ?Sized> {
    /// Stores `value` under `key`.
    fn set_raw(&self, key: &str, value: &T) -> Result<()>;
}

impl<T, F> RawSetter<T> for F
where
    T: ?Sized,
    F: Fn(&str, &T) -> Result<()>,
{
    fn set_raw(&self, key: &str, value: &T) -> Result<()> {
        self(key, value)
    }
}
