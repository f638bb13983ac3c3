use std::sync::Arc;

use axum::{Extension, Json, extract::Path};

use crate::{
    api::{ApiError, AppState},
    chart::{Attribute, ChartRequest},
};

pub async fn chart(
    Path((artist_id, attribute)): Path<(String, String)>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<ChartRequest>, ApiError> {
    let attribute: Attribute = attribute.parse()?;
    let request = state
        .session
        .chart_for(&state.catalog, &artist_id, attribute)
        .await?;
    Ok(Json(request))
}
