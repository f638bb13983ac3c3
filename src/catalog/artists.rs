use reqwest::{Client, header::CONTENT_TYPE};

use crate::{
    error::ChartError,
    types::{Track, TracksResponse},
};

pub fn artist_url(base_url: &str, artist_id: &str) -> String {
    format!("{uri}/artist/{id}", uri = base_url, id = artist_id)
}

pub fn audio_features_url(base_url: &str, artist_id: &str) -> String {
    format!(
        "{uri}/artist/{id}/audio-features",
        uri = base_url,
        id = artist_id
    )
}

/// Retrieves the basic track list of an artist from the catalog service.
///
/// The catalog loads and stores the artist on first request, so the call can
/// take a while for an artist nobody has charted yet.
///
/// # Errors
///
/// - `ChartError::Network` for transport failures and non-success statuses
/// - `ChartError::ArtistNotLoaded` when the service answers with an error body
pub async fn get_artist_tracks(
    client: &Client,
    base_url: &str,
    artist_id: &str,
) -> Result<Vec<Track>, ChartError> {
    fetch_tracks(client, &artist_url(base_url, artist_id), artist_id).await
}

/// Retrieves the artist's tracks including audio-feature fields.
///
/// The catalog only answers this for artists that were fetched through
/// [`get_artist_tracks`] before; otherwise it replies with
/// `{"error": "Artist not loaded"}`, reported as `ChartError::ArtistNotLoaded`.
pub async fn get_audio_features(
    client: &Client,
    base_url: &str,
    artist_id: &str,
) -> Result<Vec<Track>, ChartError> {
    fetch_tracks(client, &audio_features_url(base_url, artist_id), artist_id).await
}

async fn fetch_tracks(
    client: &Client,
    url: &str,
    artist_id: &str,
) -> Result<Vec<Track>, ChartError> {
    let response = client
        .get(url)
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await?
        .error_for_status()?;

    let body = response.json::<TracksResponse>().await?;
    into_tracks(body, artist_id)
}

pub fn into_tracks(body: TracksResponse, artist_id: &str) -> Result<Vec<Track>, ChartError> {
    match body.error {
        Some(_) => Err(ChartError::ArtistNotLoaded(artist_id.to_string())),
        None => Ok(body.tracks),
    }
}
