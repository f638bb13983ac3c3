use reqwest::Client;

use crate::{
    error::ChartError,
    types::{ArtistCandidate, ArtistSearchResponse},
    utils,
};

/// Queries the music search API for artists matching an autocomplete term.
///
/// The term is widened with a trailing wildcard unless it contains a `-`
/// (see [`utils::search_query`]). An empty term yields no candidates without
/// a request.
pub async fn search_artists(
    client: &Client,
    search_url: &str,
    term: &str,
    limit: u32,
) -> Result<Vec<ArtistCandidate>, ChartError> {
    if term.trim().is_empty() {
        return Ok(Vec::new());
    }

    let query = utils::search_query(term);
    let limit = limit.to_string();
    let response = client
        .get(search_url)
        .query(&[("type", "artist"), ("q", query.as_str()), ("limit", limit.as_str())])
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<ArtistSearchResponse>().await?;
    Ok(res.artists.items)
}
