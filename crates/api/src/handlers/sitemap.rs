use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tailspin_core::types::{DbId, Timestamp};
use tailspin_db::repositories::DogRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Data the site needs to render `sitemap.xml`.
#[derive(Debug, Serialize)]
pub struct SitemapData {
    pub dog_ids: Vec<DbId>,
    pub last_updated: Timestamp,
}

/// GET /api/sitemap
pub async fn sitemap_data(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let dog_ids = DogRepo::list_ids(&state.pool).await?;

    Ok(Json(SitemapData {
        dog_ids,
        last_updated: chrono::Utc::now(),
    }))
}
