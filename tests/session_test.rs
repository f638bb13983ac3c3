use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use tokio::sync::Notify;
use trackchart::{
    catalog::CatalogApi,
    chart::Attribute,
    error::ChartError,
    management::{SessionManager, SessionState},
    types::{ArtistCandidate, Track},
};

/// In-memory catalog. A gated artist blocks its track fetch until released,
/// a feature-gated one blocks its audio-feature fetch.
#[derive(Default)]
struct FakeCatalog {
    tracks: HashMap<String, Vec<Track>>,
    features: HashMap<String, Vec<Track>>,
    gated: Option<String>,
    started: Notify,
    release: Notify,
    features_gated: Option<String>,
    features_started: Notify,
    features_release: Notify,
    track_calls: AtomicUsize,
    feature_calls: AtomicUsize,
}

impl FakeCatalog {
    fn with_artist(mut self, id: &str, tracks: Vec<Track>, features: Vec<Track>) -> Self {
        self.tracks.insert(id.to_string(), tracks);
        self.features.insert(id.to_string(), features);
        self
    }

    fn gate(mut self, id: &str) -> Self {
        self.gated = Some(id.to_string());
        self
    }

    fn gate_features(mut self, id: &str) -> Self {
        self.features_gated = Some(id.to_string());
        self
    }

    fn track_calls(&self) -> usize {
        self.track_calls.load(Ordering::SeqCst)
    }

    fn feature_calls(&self) -> usize {
        self.feature_calls.load(Ordering::SeqCst)
    }
}

impl CatalogApi for FakeCatalog {
    async fn artist_tracks(&self, artist_id: &str) -> Result<Vec<Track>, ChartError> {
        self.track_calls.fetch_add(1, Ordering::SeqCst);
        if self.gated.as_deref() == Some(artist_id) {
            self.started.notify_one();
            self.release.notified().await;
        }
        self.tracks
            .get(artist_id)
            .cloned()
            .ok_or_else(|| ChartError::ArtistNotLoaded(artist_id.to_string()))
    }

    async fn audio_features(&self, artist_id: &str) -> Result<Vec<Track>, ChartError> {
        self.feature_calls.fetch_add(1, Ordering::SeqCst);
        if self.features_gated.as_deref() == Some(artist_id) {
            self.features_started.notify_one();
            self.features_release.notified().await;
        }
        self.features
            .get(artist_id)
            .cloned()
            .ok_or_else(|| ChartError::ArtistNotLoaded(artist_id.to_string()))
    }

    async fn search_artists(&self, term: &str) -> Result<Vec<ArtistCandidate>, ChartError> {
        Ok(self
            .tracks
            .keys()
            .filter(|id| id.starts_with(term))
            .map(|id| ArtistCandidate {
                id: id.clone(),
                name: id.to_uppercase(),
            })
            .collect())
    }
}

fn basic(name: &str, album: &str, duration: f64) -> Track {
    Track::new(name, album).with(Attribute::Duration, duration)
}

fn featured(name: &str, album: &str, duration: f64, energy: f64, tempo: f64) -> Track {
    basic(name, album, duration)
        .with(Attribute::Energy, energy)
        .with(Attribute::Tempo, tempo)
}

fn catalog() -> FakeCatalog {
    FakeCatalog::default()
        .with_artist(
            "band",
            vec![
                basic("a", "Debut", 200_000.0),
                basic("b", "Sequel", 100_000.0),
                basic("c", "Debut", 150_000.0),
            ],
            // The features endpoint answers in a different order
            vec![
                featured("c", "Debut", 150_000.0, 0.3, 90.0),
                featured("b", "Sequel", 100_000.0, 0.9, 128.0),
                featured("a", "Debut", 200_000.0, 0.5, 110.0),
            ],
        )
        .with_artist(
            "solo",
            vec![basic("x", "Alone", 1000.0), basic("y", "Alone", 2000.0)],
            vec![],
        )
}

#[tokio::test]
async fn test_new_session_is_idle() {
    let session = SessionManager::new();
    assert_eq!(session.state().await, SessionState::Idle);
    assert!(session.current().await.is_none());
    assert_eq!(session.generation().await, 0);
}

#[tokio::test]
async fn test_switch_without_artist() {
    let session = SessionManager::new();
    let result = session.switch_attribute(&catalog(), Attribute::Duration).await;
    assert!(matches!(result, Err(ChartError::NoSession)));
}

#[tokio::test]
async fn test_load_artist_then_chart_duration() {
    let catalog = catalog();
    let session = SessionManager::new();

    let count = session.load_artist(&catalog, "band").await.unwrap();
    assert_eq!(count, 3);
    assert_eq!(session.state().await, SessionState::TracksLoaded);

    let request = session
        .switch_attribute(&catalog, Attribute::Duration)
        .await
        .unwrap();

    assert_eq!(request.tick_labels, vec!["1:40", "2:30", "3:20"]);
    assert_eq!(session.state().await, SessionState::AttributeSelected);

    // Duration comes with the basic tracks, no feature fetch needed
    assert_eq!(catalog.feature_calls(), 0);
}

#[tokio::test]
async fn test_feature_attribute_fetches_once() {
    let catalog = catalog();
    let session = SessionManager::new();
    session.load_artist(&catalog, "band").await.unwrap();

    let energy = session
        .switch_attribute(&catalog, Attribute::Energy)
        .await
        .unwrap();
    assert_eq!(catalog.feature_calls(), 1);
    assert_eq!(energy.labels, vec!["c", "a", "b"]);
    assert_eq!(energy.tick_labels, vec!["30%", "50%", "90%"]);

    // Held tracks now carry every feature
    let tempo = session
        .switch_attribute(&catalog, Attribute::Tempo)
        .await
        .unwrap();
    let again = session
        .switch_attribute(&catalog, Attribute::Energy)
        .await
        .unwrap();
    assert_eq!(catalog.feature_calls(), 1);
    assert_eq!(tempo.tooltip_labels, vec!["90 bpm", "110 bpm", "128 bpm"]);
    assert_eq!(again.labels, energy.labels);

    let current = session.current().await.unwrap();
    assert_eq!(current.attribute(), Some(Attribute::Energy));
    assert!(current.has_attribute(Attribute::Tempo));
}

#[tokio::test]
async fn test_album_colors_survive_refetch_and_resort() {
    let catalog = catalog();
    let session = SessionManager::new();
    session.load_artist(&catalog, "band").await.unwrap();

    let before = session.current().await.unwrap().palette().clone();
    assert_eq!(before.albums(), ["Debut", "Sequel"]);

    let by_duration = session
        .switch_attribute(&catalog, Attribute::Duration)
        .await
        .unwrap();
    let by_energy = session
        .switch_attribute(&catalog, Attribute::Energy)
        .await
        .unwrap();

    let after = session.current().await.unwrap().palette().clone();
    assert_eq!(before, after);

    let debut = before.color_of("Debut").unwrap();
    let sequel = before.color_of("Sequel").unwrap();
    // duration order: b (Sequel), c (Debut), a (Debut)
    assert_eq!(by_duration.dataset.colors, vec![sequel, debut, debut]);
    // energy order: c (Debut), a (Debut), b (Sequel)
    assert_eq!(by_energy.dataset.colors, vec![debut, debut, sequel]);
}

#[tokio::test]
async fn test_failed_load_keeps_previous_session() {
    let catalog = catalog();
    let session = SessionManager::new();
    session.load_artist(&catalog, "band").await.unwrap();
    session
        .switch_attribute(&catalog, Attribute::Duration)
        .await
        .unwrap();

    let result = session.load_artist(&catalog, "unknown").await;
    assert!(matches!(result, Err(ChartError::ArtistNotLoaded(_))));

    assert_eq!(session.current_artist().await.as_deref(), Some("band"));
    assert_eq!(session.state().await, SessionState::AttributeSelected);
}

#[tokio::test]
async fn test_failed_feature_fetch_keeps_tracks() {
    let mut catalog =
        FakeCatalog::default().with_artist("lonely", vec![basic("x", "A", 1.0)], vec![]);
    catalog.features.remove("lonely");

    let session = SessionManager::new();
    session.load_artist(&catalog, "lonely").await.unwrap();

    let result = session.switch_attribute(&catalog, Attribute::Valence).await;
    assert!(matches!(result, Err(ChartError::ArtistNotLoaded(_))));
    assert_eq!(session.state().await, SessionState::TracksLoaded);
    assert_eq!(session.current().await.unwrap().tracks().len(), 1);
}

#[tokio::test]
async fn test_new_artist_replaces_session() {
    let catalog = catalog();
    let session = SessionManager::new();

    session.load_artist(&catalog, "band").await.unwrap();
    session.load_artist(&catalog, "solo").await.unwrap();

    let current = session.current().await.unwrap();
    assert_eq!(current.artist_id(), "solo");
    assert_eq!(current.tracks().len(), 2);
    assert_eq!(current.attribute(), None);
    assert_eq!(session.generation().await, 2);
}

#[tokio::test]
async fn test_stale_artist_fetch_is_discarded() {
    let catalog = Arc::new(
        catalog()
            .with_artist("slow", vec![basic("late", "Old", 1.0)], vec![])
            .gate("slow"),
    );
    let session = Arc::new(SessionManager::new());

    let (c, s) = (Arc::clone(&catalog), Arc::clone(&session));
    let slow = tokio::spawn(async move { s.load_artist(&*c, "slow").await });

    // Wait until the slow fetch is in flight, then select another artist
    catalog.started.notified().await;
    session.load_artist(&*catalog, "solo").await.unwrap();

    catalog.release.notify_one();
    let result = slow.await.unwrap();

    match result {
        Err(ChartError::Superseded { artist_id }) => assert_eq!(artist_id, "slow"),
        other => panic!("expected Superseded, got {:?}", other),
    }
    assert_eq!(session.current_artist().await.as_deref(), Some("solo"));
    assert_eq!(session.state().await, SessionState::TracksLoaded);
}

#[tokio::test]
async fn test_late_features_do_not_leak_into_next_artist() {
    let catalog = Arc::new(catalog().gate("solo").gate_features("band"));
    let session = Arc::new(SessionManager::new());
    session.load_artist(&*catalog, "band").await.unwrap();

    // Select another artist, then switch the old one while that load is pending
    let (c, s) = (Arc::clone(&catalog), Arc::clone(&session));
    let load = tokio::spawn(async move { s.load_artist(&*c, "solo").await });
    catalog.started.notified().await;

    let (c, s) = (Arc::clone(&catalog), Arc::clone(&session));
    let switch = tokio::spawn(async move { s.switch_attribute(&*c, Attribute::Energy).await });
    catalog.features_started.notified().await;

    // The new artist lands first, the old artist's features after it
    catalog.release.notify_one();
    assert_eq!(load.await.unwrap().unwrap(), 2);
    catalog.features_release.notify_one();

    match switch.await.unwrap() {
        Err(ChartError::Superseded { artist_id }) => assert_eq!(artist_id, "band"),
        other => panic!("expected Superseded, got {:?}", other),
    }

    let current = session.current().await.unwrap();
    assert_eq!(current.artist_id(), "solo");
    let names: Vec<&str> = current
        .tracks()
        .iter()
        .map(|t| t.track_name.as_str())
        .collect();
    assert_eq!(names, ["x", "y"]);
    assert_eq!(session.state().await, SessionState::TracksLoaded);
}

#[tokio::test]
async fn test_failed_load_does_not_discard_pending_features() {
    let catalog = Arc::new(catalog().gate_features("band"));
    let session = Arc::new(SessionManager::new());
    session.load_artist(&*catalog, "band").await.unwrap();

    let (c, s) = (Arc::clone(&catalog), Arc::clone(&session));
    let switch = tokio::spawn(async move { s.switch_attribute(&*c, Attribute::Energy).await });
    catalog.features_started.notified().await;

    let failed = session.load_artist(&*catalog, "unknown").await;
    assert!(matches!(failed, Err(ChartError::ArtistNotLoaded(_))));

    catalog.features_release.notify_one();
    let request = switch.await.unwrap().unwrap();

    assert_eq!(request.labels, vec!["c", "a", "b"]);
    assert_eq!(session.current_artist().await.as_deref(), Some("band"));
    assert_eq!(session.state().await, SessionState::AttributeSelected);
}

#[tokio::test]
async fn test_chart_for_reuses_loaded_artist() {
    let catalog = catalog();
    let session = SessionManager::new().with_album_labels(true);

    let first = session
        .chart_for(&catalog, "band", Attribute::Duration)
        .await
        .unwrap();
    session
        .chart_for(&catalog, "band", Attribute::Energy)
        .await
        .unwrap();

    assert_eq!(catalog.track_calls(), 1);
    assert_eq!(first.labels[0], "b (Sequel)");

    session
        .chart_for(&catalog, "solo", Attribute::Duration)
        .await
        .unwrap();
    assert_eq!(catalog.track_calls(), 2);
}

#[tokio::test]
async fn test_search_returns_to_idle() {
    let catalog = catalog();
    let session = SessionManager::new();

    let candidates = session.search(&catalog, "ban").await.unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name, "BAND");
    assert_eq!(session.state().await, SessionState::Idle);
}
