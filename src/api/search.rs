use std::sync::Arc;

use axum::{Extension, Json, extract::Query};
use serde::Deserialize;

use crate::{
    api::{ApiError, AppState},
    types::ArtistCandidate,
};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

pub async fn search(
    Query(params): Query<SearchParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<ArtistCandidate>>, ApiError> {
    let candidates = state.session.search(&state.catalog, &params.q).await?;
    Ok(Json(candidates))
}
