//! Typed wrapper with automatic serialization.

use serde::{de::DeserializeOwned, Serialize};

use crate::{KeyValueStore, KvError};

/// Typed view over a [`KeyValueStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Cache<S> {
    store: S,
}

impl<S: KeyValueStore> Cache<S> {
    /// Wrap a store backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let items: Option<Vec<LineItem>> = cache.get("pravokha-cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, KvError> {
        match self.store.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the store.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), KvError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(key, &bytes)
    }

    /// Delete a value from the store.
    pub fn remove(&self, key: &str) -> Result<(), KvError> {
        self.store.remove(key)
    }

    /// Access the underlying backend.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        name: String,
        count: u32,
    }

    #[test]
    fn test_typed_round_trip() {
        let cache = Cache::new(MemoryStore::new());
        let entry = Entry {
            name: "tee".to_string(),
            count: 3,
        };
        cache.set("entry", &entry).unwrap();
        assert_eq!(cache.get::<Entry>("entry").unwrap(), Some(entry));
    }

    #[test]
    fn test_missing_key_is_none() {
        let cache = Cache::new(MemoryStore::new());
        assert_eq!(cache.get::<Entry>("missing").unwrap(), None);
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        let store = MemoryStore::new();
        store.set("entry", b"not json").unwrap();
        let cache = Cache::new(store);
        assert!(cache.get::<Entry>("entry").is_err());
    }

    #[test]
    fn test_remove() {
        let cache = Cache::new(MemoryStore::new());
        cache.set("entry", &1u32).unwrap();
        cache.remove("entry").unwrap();
        assert_eq!(cache.get::<u32>("entry").unwrap(), None);
    }
}
