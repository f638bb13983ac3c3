use std::sync::Arc;

use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::api::AppState;

pub async fn session(Extension(state): Extension<Arc<AppState>>) -> Json<Value> {
    let status = state.session.state().await;
    let generation = state.session.generation().await;
    let current = state.session.current().await;

    Json(json!({
        "state": status,
        "generation": generation,
        "artist_id": current.as_ref().map(|s| s.artist_id().to_string()),
        "attribute": current.as_ref().and_then(|s| s.attribute()),
        "tracks": current.as_ref().map_or(0, |s| s.tracks().len()),
        "albums": current.as_ref().map(|s| s.palette().albums().to_vec()),
    }))
}
