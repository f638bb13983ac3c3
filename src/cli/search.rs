use tabled::Table;

use crate::{
    catalog::{CatalogApi, CatalogClient},
    cli::spinner,
    types::ArtistTableRow,
    warning,
};

/// Lists artists matching `term`, as the autocomplete box would suggest them.
pub async fn search(term: String) {
    let catalog = CatalogClient::from_env();

    let pb = spinner(format!("Searching artists for '{}'...", term));
    let result = catalog.search_artists(&term).await;
    pb.finish_and_clear();

    match result {
        Ok(candidates) if candidates.is_empty() => warning!("No artists match '{}'.", term),
        Ok(candidates) => {
            let rows: Vec<ArtistTableRow> = candidates
                .into_iter()
                .map(|c| ArtistTableRow {
                    name: c.name,
                    id: c.id,
                })
                .collect();
            println!("{}", Table::new(rows));
        }
        Err(e) => warning!("Artist search failed. Err: {}", e),
    }
}
