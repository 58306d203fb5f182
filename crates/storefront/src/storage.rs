//! Persisted string storage shared across page loads.
//!
//! Models the browser's key-value string store: one flat namespace of
//! string keys to string values. Independently-loaded pages have no shared
//! memory - a shared store handle is the only cross-page state, which is
//! why every consumer re-reads rather than caching.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Storage backend failure.
///
/// This is the "anything else" class of the error taxonomy: callers never
/// handle it at the ingestion boundary, they propagate it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// A previous writer panicked while holding the store lock.
    #[error("storage lock poisoned")]
    Poisoned,

    /// The backend rejected the operation.
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// A string-keyed, string-valued persistent store.
pub trait StringStore {
    /// Read the value for `key`, if present.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key` if present. Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory [`StringStore`].
///
/// Clones share the same underlying map, the way two page loads in one
/// browser share local storage. There is no cross-writer coordination:
/// the last `set` wins.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StringStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}
