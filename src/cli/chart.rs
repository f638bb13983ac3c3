use tabled::Table;

use crate::{
    catalog::{CatalogApi, CatalogClient},
    chart::{Attribute, ChartRequest},
    cli::spinner,
    error, info,
    management::SessionManager,
    success, warning,
};

/// Loads an artist and charts its tracks once per requested attribute.
///
/// The artist is given either by id or by name; a name is resolved through
/// the artist search and the first candidate wins. Attributes are charted in
/// the order given through one session, so audio features are fetched at
/// most once and album colours stay the same across charts.
///
/// # Arguments
///
/// * `artist_id` - Catalog id of the artist, takes precedence over `artist`
/// * `artist` - Artist name to search for
/// * `attributes` - Attributes to sort by; `duration` when empty
/// * `json` - Print each chart request as JSON instead of a table
/// * `album_labels` - Label bars as `track (album)`
///
/// # Error Handling
///
/// A failed track fetch is reported as a warning and nothing is charted.
/// A failed feature fetch skips that attribute and continues with the next.
pub async fn chart(
    artist_id: Option<String>,
    artist: Option<String>,
    attributes: Vec<Attribute>,
    json: bool,
    album_labels: bool,
) {
    let catalog = CatalogClient::from_env();
    let session = SessionManager::new().with_album_labels(album_labels);

    let artist_id = match (artist_id, artist) {
        (Some(id), _) => id,
        (None, Some(name)) => match resolve_artist(&catalog, &session, &name).await {
            Some(id) => id,
            None => return,
        },
        (None, None) => error!("Either --artist-id or --artist is required."),
    };

    let pb = spinner(format!("Fetching tracks for {}...", artist_id));
    let loaded = session.load_artist(&catalog, &artist_id).await;
    pb.finish_and_clear();

    match loaded {
        Ok(count) => success!("Loaded {} tracks.", count),
        Err(e) => {
            warning!("Cannot load tracks for {}. Err: {}", artist_id, e);
            return;
        }
    }

    let attributes = if attributes.is_empty() {
        vec![Attribute::Duration]
    } else {
        attributes
    };

    for attribute in attributes {
        let pb = spinner(format!("Charting by {}...", attribute));
        let request = session.switch_attribute(&catalog, attribute).await;
        pb.finish_and_clear();

        match request {
            Ok(request) => render(&request, json),
            Err(e) => warning!("Cannot chart by {}. Err: {}", attribute, e),
        }
    }
}

async fn resolve_artist<C: CatalogApi>(
    catalog: &C,
    session: &SessionManager,
    name: &str,
) -> Option<String> {
    let pb = spinner(format!("Searching artists for '{}'...", name));
    let result = session.search(catalog, name).await;
    pb.finish_and_clear();

    match result {
        Ok(candidates) => match candidates.into_iter().next() {
            Some(candidate) => {
                info!("Using artist {} ({}).", candidate.name, candidate.id);
                Some(candidate.id)
            }
            None => {
                warning!("No artists match '{}'.", name);
                None
            }
        },
        Err(e) => {
            warning!("Artist search failed. Err: {}", e);
            None
        }
    }
}

fn render(request: &ChartRequest, json: bool) {
    if json {
        match serde_json::to_string_pretty(request) {
            Ok(out) => println!("{}", out),
            Err(e) => warning!("Cannot serialize chart. Err: {}", e),
        }
        return;
    }

    info!("{}: {}", request.dataset.label, request.description);
    println!("{}", Table::new(request.table_rows()));
}
