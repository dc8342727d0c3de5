//! Integration tests for the coordinator against the in-process service.

use filmoteka_client::{RemoteClient, RemoteConfig};
use filmoteka_codec::{FilmId, RawFilm};
use filmoteka_store::{FileBackend, FilmStore, MemoryBackend};
use filmoteka_sync::{ConnectivitySignal, SignalProbe, SyncCoordinator};
use filmoteka_testkit::{sample_raw, CatalogServer, LoopbackClient};
use std::sync::Arc;
use std::time::Duration;

const ENDPOINT: &str = "https://test.example.com/moowle";
const AUTH: &str = "Basic l76oy54048so9f866780k356";
const STORE_KEY: &str = "films-store-key";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn coordinator(
    server: &Arc<CatalogServer>,
    signal: &ConnectivitySignal,
) -> SyncCoordinator<LoopbackClient, MemoryBackend, SignalProbe> {
    SyncCoordinator::new(
        RemoteClient::new(
            RemoteConfig::new(ENDPOINT, AUTH),
            LoopbackClient::new(Arc::clone(server)),
        ),
        FilmStore::new(MemoryBackend::new(), STORE_KEY),
        signal.probe(),
    )
}

#[tokio::test]
async fn online_fetch_normalizes_and_mirrors() {
    init_tracing();

    let server = Arc::new(CatalogServer::with_authorization(AUTH));
    let mut raw = sample_raw(1);
    raw.film_info.title = "Blue Blazes".into();
    raw.film_info.runtime = 94;
    raw.film_info.genre = vec!["Comedy".into()];
    server.insert(raw.clone());

    let signal = ConnectivitySignal::new(true);
    let coordinator = coordinator(&server, &signal);

    let films = coordinator.fetch_all().await.unwrap();

    assert_eq!(films.len(), 1);
    assert_eq!(films[0].info.title, "Blue Blazes");
    assert_eq!(films[0].info.duration_ms, 94 * 60_000);
    assert_eq!(films[0].info.genres, vec!["Comedy"]);

    // The cache now mirrors the server's raw record under key "1".
    let snapshot = coordinator.store().read_all();
    assert_eq!(snapshot.get("1"), Some(&raw));
}

#[tokio::test]
async fn offline_update_then_reconnect_pushes_pending_record() {
    init_tracing();

    let server = Arc::new(CatalogServer::with_authorization(AUTH));
    let signal = ConnectivitySignal::new(true);
    let coordinator = Arc::new(coordinator(&server, &signal));

    let reconciler = {
        let coordinator = Arc::clone(&coordinator);
        let rx = signal.subscribe();
        tokio::spawn(async move { coordinator.run_reconciler(rx).await })
    };

    // Connectivity drops; an update commits locally only.
    signal.set_online(false);

    let mut patch = sample_raw(1);
    patch.user_details.favorite = true;
    let film = coordinator
        .update(&FilmId::from(1u64), patch.clone())
        .await
        .unwrap();

    assert!(film.user.favorite);
    assert!(coordinator.needs_sync());
    assert!(server.is_empty());
    assert_eq!(coordinator.client().http().request_count(), 0);

    // Connectivity returns; the reconciler pushes the cached record.
    signal.set_online(true);
    wait_until(|| !coordinator.needs_sync()).await;

    assert_eq!(server.len(), 1);
    assert_eq!(server.films().get("1"), Some(&patch));

    // Exactly one bulk-sync request carried the single cached record.
    let requests = coordinator.client().http().requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.ends_with("/movies/sync"));
    let pushed: Vec<RawFilm> =
        serde_json::from_slice(requests[0].body.as_ref().unwrap()).unwrap();
    assert_eq!(pushed, vec![patch]);

    reconciler.abort();
}

#[tokio::test]
async fn reconnect_without_pending_writes_stays_quiet() {
    init_tracing();

    let server = Arc::new(CatalogServer::with_authorization(AUTH));
    let signal = ConnectivitySignal::new(true);
    let coordinator = Arc::new(coordinator(&server, &signal));

    let reconciler = {
        let coordinator = Arc::clone(&coordinator);
        let rx = signal.subscribe();
        tokio::spawn(async move { coordinator.run_reconciler(rx).await })
    };

    signal.set_online(false);
    signal.set_online(true);
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert_eq!(coordinator.client().http().request_count(), 0);

    reconciler.abort();
}

#[tokio::test]
async fn catalog_survives_restart_through_file_backend() {
    init_tracing();

    let dir = tempfile::TempDir::new().unwrap();
    let server = Arc::new(CatalogServer::with_authorization(AUTH));
    server.insert(sample_raw(1));
    server.insert(sample_raw(2));

    let signal = ConnectivitySignal::new(true);

    // First session: online fetch fills the persistent cache.
    {
        let coordinator = SyncCoordinator::new(
            RemoteClient::new(
                RemoteConfig::new(ENDPOINT, AUTH),
                LoopbackClient::new(Arc::clone(&server)),
            ),
            FilmStore::new(FileBackend::open(dir.path()).unwrap(), STORE_KEY),
            signal.probe(),
        );
        assert_eq!(coordinator.fetch_all().await.unwrap().len(), 2);
    }

    // Second session starts offline and still sees the catalog.
    signal.set_online(false);
    let coordinator = SyncCoordinator::new(
        RemoteClient::new(
            RemoteConfig::new(ENDPOINT, AUTH),
            LoopbackClient::new(Arc::clone(&server)),
        ),
        FilmStore::new(FileBackend::open(dir.path()).unwrap(), STORE_KEY),
        signal.probe(),
    );

    let films = coordinator.fetch_all().await.unwrap();
    assert_eq!(films.len(), 2);
    assert_eq!(coordinator.client().http().request_count(), 0);
}

/// Polls a condition while the reconciler task runs in the background.
async fn wait_until(condition: impl Fn() -> bool) {
    for _ in 0..100 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("condition not reached");
}
