//! In-memory cache backend for testing.

use crate::backend::CacheBackend;
use crate::error::StoreResult;
use parking_lot::RwLock;
use std::collections::HashMap;

/// An in-memory cache backend.
///
/// Suitable for unit tests, integration tests, and ephemeral caches that do
/// not need to survive the process.
///
/// # Example
///
/// ```rust
/// use filmoteka_store::{CacheBackend, MemoryBackend};
///
/// let backend = MemoryBackend::new();
/// backend.set("k", "v").unwrap();
/// assert_eq!(backend.get("k").unwrap().as_deref(), Some("v"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Creates a new empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-seeded with one entry.
    ///
    /// Useful for testing recovery from existing blobs.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let backend = Self::new();
        backend
            .entries
            .write()
            .insert(key.to_string(), value.to_string());
        backend
    }

    /// Returns the number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if no keys are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl CacheBackend for MemoryBackend {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}
