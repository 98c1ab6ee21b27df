// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory raw key-value store adapter.
//!
//! This module provides a store that keeps raw values as text in a map. It implements
//! [`RawGetter`] and [`RawSetter`] for every [`StoredValue`] type, so it can be handed
//! directly to any accessor in the service layer.

use crate::domain::{ConfigError, Result, StoredValue};
use crate::ports::{RawGetter, RawSetter};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// A thread-safe, in-memory raw configuration store.
///
/// Missing keys resolve to the caller's default. Stored text that does not convert
/// to the requested type is reported as an error rather than replaced by the default.
///
/// # Examples
///
/// ```rust
/// use typedcfg::adapters::MemoryStore;
/// use typedcfg::service::{get_int, set_int};
///
/// let store = MemoryStore::new();
/// assert_eq!(get_int(&store, "raft.server.port", 9000, &[]).unwrap(), 9000);
///
/// set_int(&store, "raft.server.port", 9001, &[]).unwrap();
/// assert_eq!(get_int(&store, "raft.server.port", 9000, &[]).unwrap(), 9001);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with pre-populated raw values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use typedcfg::adapters::MemoryStore;
    ///
    /// let mut values = HashMap::new();
    /// values.insert("raft.log.segment.size".to_string(), "8MB".to_string());
    ///
    /// let store = MemoryStore::with_values(values);
    /// assert_eq!(store.raw("raft.log.segment.size").unwrap().as_deref(), Some("8MB"));
    /// ```
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            values: RwLock::new(values),
        }
    }

    /// Returns the raw text stored under `key`, if any.
    pub fn raw(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().map_err(poisoned)?;
        Ok(values.get(key).cloned())
    }

    /// Stores raw text under `key`, replacing any previous value.
    pub fn set_raw_text(&self, key: &str, text: impl Into<String>) -> Result<()> {
        let mut values = self.values.write().map_err(poisoned)?;
        values.insert(key.to_string(), text.into());
        Ok(())
    }

    /// Removes `key`, returning its previous raw text.
    pub fn remove(&self, key: &str) -> Result<Option<String>> {
        let mut values = self.values.write().map_err(poisoned)?;
        Ok(values.remove(key))
    }

    /// Returns every stored key, sorted.
    pub fn keys(&self) -> Result<Vec<String>> {
        let values = self.values.read().map_err(poisoned)?;
        let mut keys: Vec<String> = values.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

fn poisoned<T>(err: PoisonError<T>) -> ConfigError {
    ConfigError::SourceError {
        source_name: "memory".to_string(),
        message: format!("store lock poisoned: {}", err),
        source: None,
    }
}

impl<T: StoredValue> RawGetter<T> for MemoryStore {
    fn get_raw(&self, key: &str, default: T) -> Result<T> {
        match self.raw(key)? {
            Some(text) => T::from_stored(key, &text),
            None => Ok(default),
        }
    }
}

impl<T: StoredValue> RawSetter<T> for MemoryStore {
    fn set_raw(&self, key: &str, value: &T) -> Result<()> {
        self.set_raw_text(key, value.to_stored())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SizeInBytes, TimeDuration, TimeUnit};
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_missing_key_returns_default() {
        let store = MemoryStore::new();
        let value: i64 = store.get_raw("absent", 12).unwrap();
        assert_eq!(value, 12);
    }

    #[test]
    fn test_round_trip_types() {
        let store = MemoryStore::new();

        store.set_raw("b", &true).unwrap();
        store.set_raw("i", &-7i32).unwrap();
        store.set_raw("l", &(1i64 << 40)).unwrap();
        store.set_raw("s", &"hello".to_string()).unwrap();
        store.set_raw("p", &PathBuf::from("/var/raft")).unwrap();
        store.set_raw("z", &SizeInBytes::parse("2MB").unwrap()).unwrap();
        store
            .set_raw("d", &TimeDuration::new(3, TimeUnit::Seconds))
            .unwrap();

        assert!(store.get_raw("b", false).unwrap());
        assert_eq!(store.get_raw("i", 0i32).unwrap(), -7);
        assert_eq!(store.get_raw("l", 0i64).unwrap(), 1i64 << 40);
        assert_eq!(store.get_raw("s", String::new()).unwrap(), "hello");
        assert_eq!(
            store.get_raw("p", PathBuf::new()).unwrap(),
            PathBuf::from("/var/raft")
        );
        assert_eq!(store.raw("z").unwrap().as_deref(), Some("2MB"));
        assert_eq!(store.raw("d").unwrap().as_deref(), Some("3s"));
    }

    #[test]
    fn test_unconvertible_text_is_an_error() {
        let mut values = HashMap::new();
        values.insert("port".to_string(), "eighty".to_string());
        let store = MemoryStore::with_values(values);

        let result: Result<i32> = store.get_raw("port", 80);
        assert!(matches!(result, Err(ConfigError::TypeConversionError { .. })));
    }

    #[test]
    fn test_remove_and_keys() {
        let store = MemoryStore::new();
        store.set_raw_text("b", "2").unwrap();
        store.set_raw_text("a", "1").unwrap();
        assert_eq!(store.keys().unwrap(), vec!["a", "b"]);

        assert_eq!(store.remove("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.keys().unwrap(), vec!["b"]);
    }

    #[test]
    fn test_concurrent_access() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let key = format!("k{}", i);
                    store.set_raw(&key, &i).unwrap();
                    let read: i32 = store.get_raw(&key, -1).unwrap();
                    assert_eq!(read, i);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.keys().unwrap().len(), 8);
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MemoryStore>();
    }
}
