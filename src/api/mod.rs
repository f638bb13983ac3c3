//! # API Module
//!
//! HTTP endpoints a browser chart widget can call instead of talking to the
//! catalog directly. All handlers share one [`AppState`], so the session rules
//! hold across requests: charting the same artist by another attribute reuses
//! the held tracks, a different artist replaces the session.
//!
//! ## Endpoints
//!
//! - [`health`] - `GET /health`, status and version
//! - [`search`] - `GET /search?q=TERM`, artist candidates for autocomplete
//! - [`session`] - `GET /session`, what the server currently holds
//! - [`chart`] - `GET /chart/{artist_id}/{attribute}`, a serialised chart request
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use trackchart::{api::AppState, catalog::CatalogClient, management::SessionManager, server};
//!
//! let state = Arc::new(AppState {
//!     catalog: CatalogClient::from_env(),
//!     session: SessionManager::new(),
//! });
//! let app = server::router(state);
//! ```

mod chart;
mod health;
mod search;
mod session;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{catalog::CatalogClient, error::ChartError, management::SessionManager, warning};

pub use chart::chart;
pub use health::health;
pub use search::search;
pub use session::session;

pub struct AppState {
    pub catalog: CatalogClient,
    pub session: SessionManager,
}

/// A [`ChartError`] rendered as a JSON error body.
#[derive(Debug)]
pub struct ApiError(pub ChartError);

impl From<ChartError> for ApiError {
    fn from(err: ChartError) -> Self {
        ApiError(err)
    }
}

pub fn status_for(err: &ChartError) -> StatusCode {
    match err {
        ChartError::UnknownAttribute(_) => StatusCode::BAD_REQUEST,
        ChartError::ArtistNotLoaded(_) => StatusCode::NOT_FOUND,
        ChartError::Superseded { .. } | ChartError::NoSession => StatusCode::CONFLICT,
        ChartError::Network(_) => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status == StatusCode::BAD_GATEWAY {
            warning!("Catalog request failed: {}", self.0);
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
