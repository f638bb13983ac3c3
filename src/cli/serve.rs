use std::sync::Arc;

use crate::{
    api::AppState, catalog::CatalogClient, config, error, info, management::SessionManager,
    server::start_api_server, warning,
};

/// Runs the HTTP surface until the process is stopped.
///
/// With `open`, the health endpoint is opened in the default browser once
/// the server is listening.
pub async fn serve(open: bool, album_labels: bool) {
    let state = Arc::new(AppState {
        catalog: CatalogClient::from_env(),
        session: SessionManager::new().with_album_labels(album_labels),
    });

    let addr = config::server_addr();
    info!("Serving charts on http://{}", addr);
    info!("Catalog service: {}", state.catalog.catalog_url());

    let server = tokio::spawn(start_api_server(state));

    if open && webbrowser::open(&format!("http://{}/health", addr)).is_err() {
        warning!(
            "Failed to open browser. Please navigate to http://{}/health manually.",
            addr
        );
    }

    match server.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!("Server stopped. Err: {}", e),
        Err(e) => error!("Server task failed. Err: {}", e),
    }
}
