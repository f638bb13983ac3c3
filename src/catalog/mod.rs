//! # Catalog Module
//!
//! Client side of the two read-only services the chart depends on:
//!
//! - the catalog service, which stores an artist's tracks and their audio
//!   features (`GET /artist/{id}` and `GET /artist/{id}/audio-features`)
//! - a music search API used to resolve artist names to ids for autocomplete
//!
//! [`CatalogApi`] is the narrow interface the rest of the crate talks to,
//! [`CatalogClient`] the reqwest-backed implementation. Tests substitute an
//! in-memory implementation.
//!
//! No retries or timeouts are applied here; a failed request surfaces as
//! [`ChartError::Network`].

pub mod artists;
pub mod search;

use std::future::Future;

use reqwest::Client;

use crate::{
    config,
    error::ChartError,
    types::{ArtistCandidate, Track},
};

pub trait CatalogApi: Send + Sync {
    /// Name, album and duration of every track by the artist.
    fn artist_tracks(
        &self,
        artist_id: &str,
    ) -> impl Future<Output = Result<Vec<Track>, ChartError>> + Send;

    /// The same tracks carrying audio-feature fields.
    fn audio_features(
        &self,
        artist_id: &str,
    ) -> impl Future<Output = Result<Vec<Track>, ChartError>> + Send;

    /// Artist candidates for an autocomplete term.
    fn search_artists(
        &self,
        term: &str,
    ) -> impl Future<Output = Result<Vec<ArtistCandidate>, ChartError>> + Send;
}

#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    catalog_url: String,
    search_url: String,
    search_limit: u32,
}

impl CatalogClient {
    pub fn new(catalog_url: impl Into<String>, search_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            catalog_url: catalog_url.into().trim_end_matches('/').to_string(),
            search_url: search_url.into(),
            search_limit: config::DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn from_env() -> Self {
        Self::new(config::catalog_api_url(), config::search_api_url())
            .with_search_limit(config::search_limit())
    }

    pub fn with_search_limit(mut self, limit: u32) -> Self {
        self.search_limit = limit;
        self
    }

    pub fn catalog_url(&self) -> &str {
        &self.catalog_url
    }
}

impl CatalogApi for CatalogClient {
    async fn artist_tracks(&self, artist_id: &str) -> Result<Vec<Track>, ChartError> {
        artists::get_artist_tracks(&self.client, &self.catalog_url, artist_id).await
    }

    async fn audio_features(&self, artist_id: &str) -> Result<Vec<Track>, ChartError> {
        artists::get_audio_features(&self.client, &self.catalog_url, artist_id).await
    }

    async fn search_artists(&self, term: &str) -> Result<Vec<ArtistCandidate>, ChartError> {
        search::search_artists(&self.client, &self.search_url, term, self.search_limit).await
    }
}
