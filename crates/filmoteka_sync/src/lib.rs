//! # Filmoteka Sync
//!
//! Offline-first synchronization layer for the Filmoteka catalog.
//!
//! This crate provides:
//! - [`SyncCoordinator`] - per-call online/offline routing with
//!   write-through caching and optimistic offline commits
//! - [`ConnectivitySignal`] / [`ConnectivityProbe`] - the hosting
//!   environment's connectivity feed and the capability the coordinator
//!   checks at call time
//! - A reconciler that pushes pending offline writes once connectivity
//!   returns
//!
//! ## Architecture
//!
//! UI intents flow into the coordinator, which routes each operation to the
//! remote client or the local cache depending on connectivity at that
//! moment. Remote reads and successful remote writes are mirrored into the
//! cache; offline writes become the cached record immediately and set a
//! pending-sync flag. When connectivity is restored, the entire cache
//! snapshot is pushed to the service, whose merge result is the new source
//! of truth.
//!
//! ## Key invariants
//!
//! - Connectivity is checked per call; there is no persistent mode
//! - Write-through happens only on success
//! - A failed online operation propagates; no offline fallback, no retry
//! - Offline operations never touch the network
//!
//! ## Example
//!
//! ```
//! use filmoteka_client::{RemoteClient, RemoteConfig};
//! use filmoteka_store::{FilmStore, MemoryBackend};
//! use filmoteka_sync::{ConnectivitySignal, SyncCoordinator};
//! use filmoteka_testkit::{CatalogServer, LoopbackClient};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let server = Arc::new(CatalogServer::new());
//! let signal = ConnectivitySignal::new(true);
//! let coordinator = SyncCoordinator::new(
//!     RemoteClient::new(
//!         RemoteConfig::new("https://catalog.example.com/moowle", "Basic token"),
//!         LoopbackClient::new(server),
//!     ),
//!     FilmStore::new(MemoryBackend::new(), "films-store-key"),
//!     signal.probe(),
//! );
//!
//! let films = coordinator.fetch_all().await.unwrap();
//! assert!(films.is_empty());
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod connectivity;
mod coordinator;
mod error;

pub use connectivity::{ConnectivityProbe, ConnectivitySignal, SignalProbe, StaticProbe};
pub use coordinator::{SyncCoordinator, SyncStats};
pub use error::{SyncError, SyncResult};
