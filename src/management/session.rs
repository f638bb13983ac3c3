use serde::Serialize;
use tokio::sync::Mutex;

use crate::{
    catalog::CatalogApi,
    chart::{AlbumPalette, Attribute, ChartRequest, ChartRequestBuilder},
    error::ChartError,
    types::{ArtistCandidate, Track},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    Searching,
    ArtistSelected,
    TracksLoaded,
    AttributeSelected,
    FeaturesLoading,
}

/// The loaded artist, its tracks and the attribute last charted.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistChartSession {
    epoch: u64,
    artist_id: String,
    tracks: Vec<Track>,
    attribute: Option<Attribute>,
    palette: AlbumPalette,
}

impl ArtistChartSession {
    /// Album colours are fixed here, from the fetch order.
    pub fn new(artist_id: impl Into<String>, tracks: Vec<Track>) -> Self {
        let palette = AlbumPalette::from_tracks(&tracks);
        Self {
            epoch: 0,
            artist_id: artist_id.into(),
            tracks,
            attribute: None,
            palette,
        }
    }

    pub fn artist_id(&self) -> &str {
        &self.artist_id
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn attribute(&self) -> Option<Attribute> {
        self.attribute
    }

    pub fn palette(&self) -> &AlbumPalette {
        &self.palette
    }

    /// True when every held track carries `attribute`, so no refetch is needed.
    pub fn has_attribute(&self, attribute: Attribute) -> bool {
        self.tracks.iter().all(|t| t.has(attribute))
    }

    /// Swaps in a refetched track set. The palette survives unless the new
    /// set brings albums it has never seen.
    pub fn replace_tracks(&mut self, tracks: Vec<Track>) {
        if !self.palette.covers(&tracks) {
            self.palette = AlbumPalette::from_tracks(&tracks);
        }
        self.tracks = tracks;
    }

    pub fn chart(&mut self, attribute: Attribute, album_in_labels: bool) -> ChartRequest {
        self.attribute = Some(attribute);
        ChartRequestBuilder::new(attribute)
            .album_in_labels(album_in_labels)
            .build_from(&self.tracks, &self.palette)
    }
}

struct Inner {
    generation: u64,
    installed: u64,
    state: SessionState,
    session: Option<ArtistChartSession>,
}

impl Inner {
    fn settled_state(&self) -> SessionState {
        match &self.session {
            Some(s) if s.attribute.is_some() => SessionState::AttributeSelected,
            Some(_) => SessionState::TracksLoaded,
            None => SessionState::Idle,
        }
    }

    // A pending artist load owns the state until it resolves.
    fn settle_unless_loading(&mut self) {
        if self.state != SessionState::ArtistSelected {
            self.state = self.settled_state();
        }
    }

    fn install(&mut self, mut session: ArtistChartSession) {
        self.installed += 1;
        session.epoch = self.installed;
        self.session = Some(session);
    }

    /// The live session, if it is still the one installed at `epoch`.
    fn session_at(&mut self, epoch: u64, artist_id: &str) -> Option<&mut ArtistChartSession> {
        self.session
            .as_mut()
            .filter(|s| s.epoch == epoch && s.artist_id == artist_id)
    }
}

/// Single owner of the live [`ArtistChartSession`].
///
/// Every artist selection bumps a generation counter before its fetch starts.
/// A track fetch that completes under an older generation is discarded with
/// [`ChartError::Superseded`], so a slow response for a previous artist never
/// overwrites a newer one.
///
/// Each installed session also gets its own epoch. A feature fetch is applied
/// only if the session it was started for is still live, whatever artist
/// loads started or failed in between. The lock is never held across a
/// network call.
pub struct SessionManager {
    inner: Mutex<Inner>,
    album_in_labels: bool,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                generation: 0,
                installed: 0,
                state: SessionState::Idle,
                session: None,
            }),
            album_in_labels: false,
        }
    }

    pub fn with_album_labels(mut self, enabled: bool) -> Self {
        self.album_in_labels = enabled;
        self
    }

    pub async fn state(&self) -> SessionState {
        self.inner.lock().await.state
    }

    pub async fn generation(&self) -> u64 {
        self.inner.lock().await.generation
    }

    pub async fn current(&self) -> Option<ArtistChartSession> {
        self.inner.lock().await.session.clone()
    }

    pub async fn current_artist(&self) -> Option<String> {
        self.inner
            .lock()
            .await
            .session
            .as_ref()
            .map(|s| s.artist_id.clone())
    }

    /// Runs an autocomplete query. Only marks the session as searching while
    /// nothing is loaded yet.
    pub async fn search<C: CatalogApi>(
        &self,
        catalog: &C,
        term: &str,
    ) -> Result<Vec<ArtistCandidate>, ChartError> {
        {
            let mut inner = self.inner.lock().await;
            if inner.session.is_none() {
                inner.state = SessionState::Searching;
            }
        }

        let result = catalog.search_artists(term).await;

        let mut inner = self.inner.lock().await;
        if inner.state == SessionState::Searching {
            inner.state = inner.settled_state();
        }
        result
    }

    /// Fetches the artist's tracks and replaces the session with them.
    ///
    /// Returns the number of tracks loaded. On failure the previous session is
    /// left as it was.
    pub async fn load_artist<C: CatalogApi>(
        &self,
        catalog: &C,
        artist_id: &str,
    ) -> Result<usize, ChartError> {
        let generation = {
            let mut inner = self.inner.lock().await;
            inner.generation += 1;
            inner.state = SessionState::ArtistSelected;
            inner.generation
        };

        let result = catalog.artist_tracks(artist_id).await;

        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            return Err(ChartError::Superseded {
                artist_id: artist_id.to_string(),
            });
        }

        match result {
            Ok(tracks) => {
                let count = tracks.len();
                inner.install(ArtistChartSession::new(artist_id, tracks));
                inner.state = SessionState::TracksLoaded;
                Ok(count)
            }
            Err(e) => {
                inner.state = inner.settled_state();
                Err(e)
            }
        }
    }

    /// Charts the held tracks by `attribute`.
    ///
    /// When any held track lacks the field, the audio features are fetched
    /// first and replace the held tracks.
    pub async fn switch_attribute<C: CatalogApi>(
        &self,
        catalog: &C,
        attribute: Attribute,
    ) -> Result<ChartRequest, ChartError> {
        let (epoch, artist_id) = {
            let mut guard = self.inner.lock().await;
            let inner = &mut *guard;
            let session = inner.session.as_mut().ok_or(ChartError::NoSession)?;
            if session.has_attribute(attribute) {
                let request = session.chart(attribute, self.album_in_labels);
                inner.settle_unless_loading();
                return Ok(request);
            }
            let started = (session.epoch, session.artist_id.clone());
            inner.state = SessionState::FeaturesLoading;
            started
        };

        let result = catalog.audio_features(&artist_id).await;

        let mut inner = self.inner.lock().await;
        let Some(session) = inner.session_at(epoch, &artist_id) else {
            return Err(ChartError::Superseded { artist_id });
        };

        match result {
            Ok(tracks) => {
                session.replace_tracks(tracks);
                let request = session.chart(attribute, self.album_in_labels);
                inner.settle_unless_loading();
                Ok(request)
            }
            Err(e) => {
                inner.settle_unless_loading();
                Err(e)
            }
        }
    }

    /// Loads `artist_id` unless it is already the live session, then charts it.
    pub async fn chart_for<C: CatalogApi>(
        &self,
        catalog: &C,
        artist_id: &str,
        attribute: Attribute,
    ) -> Result<ChartRequest, ChartError> {
        if self.current_artist().await.as_deref() != Some(artist_id) {
            self.load_artist(catalog, artist_id).await?;
        }
        self.switch_attribute(catalog, attribute).await
    }
}
