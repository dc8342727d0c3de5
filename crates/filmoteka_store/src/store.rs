//! The local film cache.

use crate::backend::CacheBackend;
use crate::error::StoreResult;
use filmoteka_codec::{FilmId, RawFilm};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use tracing::warn;

/// Cache snapshot: entity id rendered as a string, mapped to its raw form.
pub type Snapshot = BTreeMap<String, RawFilm>;

/// Durable key-value cache of the whole catalog.
///
/// The entire map is serialized as one JSON blob under one backend key,
/// identical in shape to the wire schema, so the snapshot can be replayed
/// to the remote service as-is.
///
/// # Fail-open reads
///
/// A missing or unparseable blob is treated as an empty cache, not an
/// error. This is deliberate, documented data-loss behavior: the cache is a
/// mirror of server state plus pending local edits, and a corrupt mirror is
/// discarded rather than surfaced.
///
/// # Write serialization
///
/// `write` is a read-modify-write of the whole blob. An internal mutex
/// covers the full cycle so interleaved writers on a host with suspending
/// storage cannot lose updates.
pub struct FilmStore<B: CacheBackend> {
    backend: B,
    store_key: String,
    write_lock: Mutex<()>,
}

impl<B: CacheBackend> FilmStore<B> {
    /// Creates a store over `backend`, persisting under `store_key`.
    pub fn new(backend: B, store_key: impl Into<String>) -> Self {
        Self {
            backend,
            store_key: store_key.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the backend key the blob is stored under.
    pub fn store_key(&self) -> &str {
        &self.store_key
    }

    /// Reads the entire cache snapshot.
    ///
    /// Never fails: an absent blob, a backend read error, or a blob that
    /// does not parse all degrade to an empty map.
    pub fn read_all(&self) -> Snapshot {
        let blob = match self.backend.get(&self.store_key) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Snapshot::new(),
            Err(err) => {
                warn!(key = %self.store_key, error = %err, "cache read failed, serving empty");
                return Snapshot::new();
            }
        };

        match serde_json::from_str(&blob) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(key = %self.store_key, error = %err, "cache blob corrupt, serving empty");
                Snapshot::new()
            }
        }
    }

    /// Reads one cached record.
    pub fn read_one(&self, id: &FilmId) -> Option<RawFilm> {
        self.read_all().remove(&id.cache_key())
    }

    /// Writes one record, replacing any previous record for the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated blob cannot be serialized or the
    /// backend write fails. The previous blob is left in place on failure.
    pub fn write(&self, id: &FilmId, raw: RawFilm) -> StoreResult<()> {
        let _guard = self.write_lock.lock();

        let mut snapshot = self.read_all();
        snapshot.insert(id.cache_key(), raw);

        let blob = serde_json::to_string(&snapshot)?;
        self.backend.set(&self.store_key, &blob)
    }

    /// Removes the whole blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn clear(&self) -> StoreResult<()> {
        let _guard = self.write_lock.lock();
        self.backend.remove(&self.store_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;
    use filmoteka_codec::{RawFilmInfo, RawRelease, RawUserDetails};

    const KEY: &str = "films-store-key";

    fn raw(id: u64, title: &str) -> RawFilm {
        RawFilm {
            id: FilmId::from(id),
            film_info: RawFilmInfo {
                title: title.into(),
                alternative_title: String::new(),
                description: String::new(),
                poster: String::new(),
                runtime: 100,
                actors: vec![],
                genre: vec![],
                age_rating: 0,
                director: String::new(),
                writers: vec![],
                release: RawRelease::default(),
                total_rating: 0.0,
            },
            user_details: RawUserDetails::default(),
            comments: vec![],
        }
    }

    fn store() -> FilmStore<MemoryBackend> {
        FilmStore::new(MemoryBackend::new(), KEY)
    }

    #[test]
    fn read_all_on_empty_backend_is_empty() {
        assert!(store().read_all().is_empty());
    }

    #[test]
    fn read_all_on_corrupt_blob_is_empty() {
        let backend = MemoryBackend::with_entry(KEY, "{not json");
        let store = FilmStore::new(backend, KEY);
        assert!(store.read_all().is_empty());
    }

    #[test]
    fn read_all_on_wrong_shape_is_empty() {
        let backend = MemoryBackend::with_entry(KEY, "[1, 2, 3]");
        let store = FilmStore::new(backend, KEY);
        assert!(store.read_all().is_empty());
    }

    #[test]
    fn write_then_read_one() {
        let store = store();
        store.write(&FilmId::from(1u64), raw(1, "one")).unwrap();
        store.write(&FilmId::from(2u64), raw(2, "two")).unwrap();

        let found = store.read_one(&FilmId::from(2u64)).unwrap();
        assert_eq!(found.film_info.title, "two");
        assert!(store.read_one(&FilmId::from(3u64)).is_none());
    }

    #[test]
    fn write_replaces_existing_record() {
        let store = store();
        let id = FilmId::from(1u64);
        store.write(&id, raw(1, "before")).unwrap();
        store.write(&id, raw(1, "after")).unwrap();

        assert_eq!(store.read_all().len(), 1);
        assert_eq!(store.read_one(&id).unwrap().film_info.title, "after");
    }

    #[test]
    fn snapshot_round_trips_through_blob() {
        let backend = MemoryBackend::new();
        let store = FilmStore::new(backend, KEY);
        store.write(&FilmId::from(1u64), raw(1, "one")).unwrap();

        // A second store over the same backend sees the same snapshot.
        let reopened = FilmStore::new(MemoryBackend::with_entry(KEY, "{}"), KEY);
        assert!(reopened.read_one(&FilmId::from(1u64)).is_none());

        let snapshot = store.read_all();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.contains_key("1"));
    }

    #[test]
    fn string_ids_key_the_snapshot() {
        let store = store();
        let id = FilmId::from("f-9");
        let mut record = raw(0, "named");
        record.id = id.clone();

        store.write(&id, record).unwrap();
        assert!(store.read_all().contains_key("f-9"));
    }

    #[test]
    fn clear_removes_the_blob() {
        let store = store();
        store.write(&FilmId::from(1u64), raw(1, "one")).unwrap();
        store.clear().unwrap();
        assert!(store.read_all().is_empty());
    }
}
