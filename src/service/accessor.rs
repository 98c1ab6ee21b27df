// SPDX-License-Identifier: MIT OR Apache-2.0

//! The typed accessor pipeline.
//!
//! Reads go fetch-or-default, log, validate, return. Writes go validate, store, log.
//! The typed wrappers are thin instantiations of [`get`] and [`set`] that prepend the
//! assertions their type always needs.

use crate::domain::{ConfigError, Result, SizeInBytes, TimeDuration};
use crate::introspect::Documented;
use crate::ports::{AddressResolver, RawGetter, RawSetter};
use crate::service::assertions::{
    apply, require_int, require_min, require_non_negative_size, require_non_negative_time_duration,
    Assertion,
};
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Where a value read by [`get`] appears to have come from.
///
/// This is decided by equality with the default, not by provenance: a value that was
/// explicitly configured but equals the default is reported as [`ValueSource::Default`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueSource {
    /// The value equals the default.
    Default,
    /// The value differs from the default.
    Custom,
}

impl ValueSource {
    /// Classifies `value` against `default`.
    pub fn classify<T: PartialEq + ?Sized>(value: &T, default: &T) -> Self {
        if value == default {
            ValueSource::Default
        } else {
            ValueSource::Custom
        }
    }
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueSource::Default => f.write_str("default"),
            ValueSource::Custom => f.write_str("custom"),
        }
    }
}

fn log_get<T: Documented + PartialEq>(key: &str, value: &T, default: &T) {
    let source = ValueSource::classify(value, default);
    tracing::info!("{} = {} ({})", key, value.render(), source);
}

fn log_set<T: Documented + ?Sized>(key: &str, value: &T) {
    tracing::debug!("set {} = {}", key, value.render());
}

fn prepend<'a, T: ?Sized>(
    first: &'a dyn Assertion<T>,
    rest: &[&'a dyn Assertion<T>],
) -> Vec<&'a dyn Assertion<T>> {
    std::iter::once(first).chain(rest.iter().copied()).collect()
}

/// Reads `key` through `getter`, logs it, and validates it.
///
/// The getter is asked for `key` with `default` as the fallback. The resolved value
/// is logged at INFO level together with whether it equals the default, and then
/// every assertion is applied in order. The first failing assertion is returned and
/// later ones are not evaluated.
///
/// # Examples
///
/// ```rust
/// use typedcfg::domain::Result;
/// use typedcfg::service::{assertions::require_max, get};
///
/// let getter = |_key: &str, _default: i64| -> Result<i64> { Ok(10) };
///
/// assert_eq!(get(&getter, "raft.grpc.message.size.max", 5i64, &[]).unwrap(), 10);
/// assert!(get(&getter, "raft.grpc.message.size.max", 5i64, &[&require_max(8i64)]).is_err());
/// ```
pub fn get<T, G>(getter: &G, key: &str, default: T, assertions: &[&dyn Assertion<T>]) -> Result<T>
where
    T: Clone + PartialEq + Documented,
    G: RawGetter<T> + ?Sized,
{
    let value = getter.get_raw(key, default.clone())?;
    log_get(key, &value, &default);
    apply(key, &value, assertions)?;
    Ok(value)
}

/// Validates `value` and stores it under `key` through `setter`.
///
/// Assertions run before anything is stored; a failing assertion leaves the store
/// untouched. The write is logged at DEBUG level.
pub fn set<T, S>(setter: &S, key: &str, value: &T, assertions: &[&dyn Assertion<T>]) -> Result<()>
where
    T: Documented + ?Sized,
    S: RawSetter<T> + ?Sized,
{
    apply(key, value, assertions)?;
    setter.set_raw(key, value)?;
    log_set(key, value);
    Ok(())
}

/// Reads a boolean.
pub fn get_boolean<G>(
    getter: &G,
    key: &str,
    default: bool,
    assertions: &[&dyn Assertion<bool>],
) -> Result<bool>
where
    G: RawGetter<bool> + ?Sized,
{
    get(getter, key, default, assertions)
}

/// Reads a 32-bit integer. Range checks are up to the caller.
pub fn get_int<G>(getter: &G, key: &str, default: i32, assertions: &[&dyn Assertion<i32>]) -> Result<i32>
where
    G: RawGetter<i32> + ?Sized,
{
    get(getter, key, default, assertions)
}

/// Reads a 64-bit integer. Range checks are up to the caller.
pub fn get_long<G>(getter: &G, key: &str, default: i64, assertions: &[&dyn Assertion<i64>]) -> Result<i64>
where
    G: RawGetter<i64> + ?Sized,
{
    get(getter, key, default, assertions)
}

/// Reads a 64-bit integer and narrows it to 32 bits.
///
/// Assertions apply to the 64-bit value; a value outside the `i32` range is then a
/// validation failure.
pub fn get_int_from_long<G>(
    getter: &G,
    key: &str,
    default: i64,
    assertions: &[&dyn Assertion<i64>],
) -> Result<i32>
where
    G: RawGetter<i64> + ?Sized,
{
    let value = get_long(getter, key, default, assertions)?;
    require_int(key, value)
}

/// Reads a file path.
pub fn get_file<G>(
    getter: &G,
    key: &str,
    default: PathBuf,
    assertions: &[&dyn Assertion<PathBuf>],
) -> Result<PathBuf>
where
    G: RawGetter<PathBuf> + ?Sized,
{
    get(getter, key, default, assertions)
}

/// Reads a string.
pub fn get_string<G>(
    getter: &G,
    key: &str,
    default: String,
    assertions: &[&dyn Assertion<String>],
) -> Result<String>
where
    G: RawGetter<String> + ?Sized,
{
    get(getter, key, default, assertions)
}

/// Reads a byte size.
///
/// A negative resolved size is always rejected, before any caller assertion runs.
pub fn get_size_in_bytes<G>(
    getter: &G,
    key: &str,
    default: SizeInBytes,
    assertions: &[&dyn Assertion<SizeInBytes>],
) -> Result<SizeInBytes>
where
    G: RawGetter<SizeInBytes> + ?Sized,
{
    let non_negative = require_non_negative_size();
    get(getter, key, default, &prepend(&non_negative, assertions))
}

/// Reads a time duration.
///
/// A negative duration is always rejected, before any caller assertion runs.
pub fn get_time_duration<G>(
    getter: &G,
    key: &str,
    default: TimeDuration,
    assertions: &[&dyn Assertion<TimeDuration>],
) -> Result<TimeDuration>
where
    G: RawGetter<TimeDuration> + ?Sized,
{
    let non_negative = require_non_negative_time_duration();
    get(getter, key, default, &prepend(&non_negative, assertions))
}

/// Reads an address string and resolves it into a socket address.
///
/// Parsing and lookup are delegated to `resolver`. A failed lookup is reported as
/// [`ConfigError::AddressResolution`] naming the key and the text that was read.
pub fn get_socket_addr<G, R>(getter: &G, key: &str, default: &str, resolver: &R) -> Result<SocketAddr>
where
    G: RawGetter<String> + ?Sized,
    R: AddressResolver + ?Sized,
{
    let address = get_string(getter, key, default.to_string(), &[])?;
    resolver
        .resolve(&address)
        .map_err(|e| ConfigError::AddressResolution {
            key: key.to_string(),
            address,
            source: Box::new(e),
        })
}

/// Stores a boolean.
pub fn set_boolean<S>(setter: &S, key: &str, value: bool, assertions: &[&dyn Assertion<bool>]) -> Result<()>
where
    S: RawSetter<bool> + ?Sized,
{
    set(setter, key, &value, assertions)
}

/// Stores a 32-bit integer.
pub fn set_int<S>(setter: &S, key: &str, value: i32, assertions: &[&dyn Assertion<i32>]) -> Result<()>
where
    S: RawSetter<i32> + ?Sized,
{
    set(setter, key, &value, assertions)
}

/// Stores a 64-bit integer.
pub fn set_long<S>(setter: &S, key: &str, value: i64, assertions: &[&dyn Assertion<i64>]) -> Result<()>
where
    S: RawSetter<i64> + ?Sized,
{
    set(setter, key, &value, assertions)
}

/// Stores a file path.
pub fn set_file<S>(
    setter: &S,
    key: &str,
    value: PathBuf,
    assertions: &[&dyn Assertion<PathBuf>],
) -> Result<()>
where
    S: RawSetter<PathBuf> + ?Sized,
{
    set(setter, key, &value, assertions)
}

/// Stores a string.
pub fn set_string<S>(
    setter: &S,
    key: &str,
    value: &str,
    assertions: &[&dyn Assertion<String>],
) -> Result<()>
where
    S: RawSetter<String> + ?Sized,
{
    set(setter, key, &value.to_string(), assertions)
}

/// Stores a byte size as its original text.
///
/// The non-negative check and the caller's assertions apply to the numeric size;
/// what reaches the store is [`SizeInBytes::input`], so `"10MB"` stays `"10MB"`.
pub fn set_size_in_bytes<S>(
    setter: &S,
    key: &str,
    value: &SizeInBytes,
    assertions: &[&dyn Assertion<i64>],
) -> Result<()>
where
    S: RawSetter<String> + ?Sized,
{
    let non_negative = require_min(0i64);
    apply(key, &value.size(), &prepend(&non_negative, assertions))?;
    set(setter, key, &value.input().to_string(), &[])
}

/// Stores a time duration. Negative durations are always rejected.
pub fn set_time_duration<S>(
    setter: &S,
    key: &str,
    value: &TimeDuration,
    assertions: &[&dyn Assertion<TimeDuration>],
) -> Result<()>
where
    S: RawSetter<TimeDuration> + ?Sized,
{
    let non_negative = require_non_negative_time_duration();
    set(setter, key, value, &prepend(&non_negative, assertions))
}
