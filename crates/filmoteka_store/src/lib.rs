//! # Filmoteka Store
//!
//! Durable local cache for the Filmoteka catalog.
//!
//! The cache holds the entire catalog as one JSON blob under one key of a
//! host-supplied key-value primitive. Records are kept in wire form, so the
//! snapshot can be replayed to the remote service without re-encoding.
//!
//! ## Design principles
//!
//! - Backends are opaque string stores; the cache owns the blob format
//! - Reads are fail-open: a corrupt or missing blob is an empty cache
//! - Writes are whole-blob read-modify-write, serialized internally
//!
//! ## Available backends
//!
//! - [`MemoryBackend`] - for testing and ephemeral caches
//! - [`FileBackend`] - for persistent storage using OS file APIs
//!
//! ## Example
//!
//! ```
//! use filmoteka_store::{FilmStore, MemoryBackend};
//!
//! let store = FilmStore::new(MemoryBackend::new(), "films-store-key");
//! assert!(store.read_all().is_empty());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod file;
mod memory;
mod store;

pub use backend::CacheBackend;
pub use error::{StoreError, StoreResult};
pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use store::{FilmStore, Snapshot};
