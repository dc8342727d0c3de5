//! The sync coordinator.

use crate::connectivity::ConnectivityProbe;
use crate::error::SyncResult;
use filmoteka_client::{HttpClient, RemoteClient};
use filmoteka_codec::{Film, FilmId, RawFilm};
use filmoteka_store::{CacheBackend, FilmStore};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Counters describing how operations were served.
#[derive(Debug, Clone, Default)]
pub struct SyncStats {
    /// Catalog fetches served by the remote service.
    pub remote_fetches: u64,
    /// Catalog fetches served by the local cache.
    pub cache_fetches: u64,
    /// Updates pushed to the remote service.
    pub remote_updates: u64,
    /// Updates committed locally while offline.
    pub deferred_updates: u64,
    /// Completed reconciliation pushes.
    pub reconciliations: u64,
}

/// Orchestrator of the offline-first read/write paths.
///
/// For every operation the coordinator checks connectivity at call time and
/// routes to the remote service or the local cache; there is no persistent
/// mode. Remote reads and successful remote writes are mirrored into the
/// cache (write-through), offline writes are committed locally and marked
/// for reconciliation, and a reconnect pushes the pending snapshot once.
///
/// Dependencies are injected at construction; nothing is looked up from the
/// environment.
///
/// # Failure semantics
///
/// No retries anywhere. A failed online operation is returned to the caller
/// as-is and the cache keeps its last-known-good state; in particular a
/// failed online `update` does not fall back to the offline path.
pub struct SyncCoordinator<C: HttpClient, B: CacheBackend, P: ConnectivityProbe> {
    client: RemoteClient<C>,
    store: FilmStore<B>,
    probe: P,
    needs_sync: AtomicBool,
    stats: RwLock<SyncStats>,
}

impl<C: HttpClient, B: CacheBackend, P: ConnectivityProbe> SyncCoordinator<C, B, P> {
    /// Creates a coordinator over its three collaborators.
    pub fn new(client: RemoteClient<C>, store: FilmStore<B>, probe: P) -> Self {
        Self {
            client,
            store,
            probe,
            needs_sync: AtomicBool::new(false),
            stats: RwLock::new(SyncStats::default()),
        }
    }

    /// Returns the remote client.
    pub fn client(&self) -> &RemoteClient<C> {
        &self.client
    }

    /// Returns the local cache.
    pub fn store(&self) -> &FilmStore<B> {
        &self.store
    }

    /// Returns true when an offline write awaits reconciliation.
    pub fn needs_sync(&self) -> bool {
        self.needs_sync.load(Ordering::SeqCst)
    }

    /// Returns a copy of the operation counters.
    pub fn stats(&self) -> SyncStats {
        self.stats.read().clone()
    }

    /// Fetches the catalog.
    ///
    /// Online: remote fetch, each entity mirrored into the cache.
    /// Offline: the cache snapshot decoded, no network attempt.
    pub async fn fetch_all(&self) -> SyncResult<Vec<Film>> {
        if self.probe.is_online() {
            let films = self.client.fetch_all().await?;
            for film in &films {
                self.store.write(&film.id, film.to_raw())?;
            }
            self.stats.write().remote_fetches += 1;
            debug!(count = films.len(), "catalog fetched from remote");
            Ok(films)
        } else {
            let films: Vec<Film> = self
                .store
                .read_all()
                .into_values()
                .map(Film::from_raw)
                .collect();
            self.stats.write().cache_fetches += 1;
            debug!(count = films.len(), "catalog served from cache");
            Ok(films)
        }
    }

    /// Updates one entity with its full raw representation.
    ///
    /// Online: remote update; the service's canonical record is mirrored
    /// into the cache on success. A remote failure propagates and the cache
    /// is left untouched.
    ///
    /// Offline: the patch becomes the cached record immediately and the
    /// pending-sync flag is set (optimistic local commit).
    pub async fn update(&self, id: &FilmId, raw: RawFilm) -> SyncResult<Film> {
        if self.probe.is_online() {
            let film = self.client.update(id, &raw).await?;
            self.store.write(id, film.to_raw())?;
            self.stats.write().remote_updates += 1;
            Ok(film)
        } else {
            self.store.write(id, raw.clone())?;
            self.needs_sync.store(true, Ordering::SeqCst);
            self.stats.write().deferred_updates += 1;
            debug!(%id, "update committed locally, pending sync");
            Ok(Film::from_raw(raw))
        }
    }

    /// Pushes the entire cache snapshot for server-side merging.
    ///
    /// The response is the service's merge outcome; no local state changes
    /// beyond clearing the pending-sync flag. Callers wanting the merged
    /// server state re-fetch it.
    pub async fn sync_all(&self) -> SyncResult<Vec<Film>> {
        let snapshot: Vec<RawFilm> = self.store.read_all().into_values().collect();
        debug!(count = snapshot.len(), "pushing cache snapshot");

        let films = self.client.bulk_sync(&snapshot).await?;
        self.needs_sync.store(false, Ordering::SeqCst);
        self.stats.write().reconciliations += 1;
        Ok(films)
    }

    /// Reconciles pending offline writes on connectivity transitions.
    ///
    /// Awaits notifications on the connectivity feed; one that leaves the
    /// state online while offline writes are pending triggers one
    /// `sync_all`. The watch channel collapses rapid transitions to the
    /// latest state, which is safe here: the pending flag, not the edge
    /// itself, decides whether anything is pushed. The push is
    /// fire-and-forget: a failure is logged and waits for the next
    /// transition, never retried here. Runs until the feed closes.
    pub async fn run_reconciler(&self, mut rx: watch::Receiver<bool>) {
        while rx.changed().await.is_ok() {
            let online = *rx.borrow_and_update();
            if online && self.needs_sync() {
                match self.sync_all().await {
                    Ok(films) => {
                        info!(count = films.len(), "reconciled after reconnect");
                    }
                    Err(err) => warn!(error = %err, "reconciliation failed"),
                }
            }
        }
    }
}
