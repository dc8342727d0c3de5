//! Cache backend trait definition.

use crate::error::StoreResult;

/// A persistent key-value primitive supplied by the hosting environment.
///
/// Backends are **opaque string stores**. They hold serialized blobs under
/// string keys and do not interpret them; the cache owns the blob format.
///
/// # Invariants
///
/// - `get` returns exactly the value previously passed to `set` for that key
/// - `set` replaces any existing value for the key
/// - Backends must be `Send + Sync`; the cache serializes its own writes
///
/// # Implementors
///
/// - [`super::MemoryBackend`] - for testing and ephemeral caches
/// - [`super::FileBackend`] - for persistent storage
pub trait CacheBackend: Send + Sync {
    /// Reads the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the host storage cannot be read.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the host storage cannot be written.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the host storage cannot be written.
    fn remove(&self, key: &str) -> StoreResult<()>;
}
