use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tailspin_core::breeds::with_sentinels;
use tailspin_db::repositories::BreedRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/breeds
///
/// Stored breed names in ascending order, followed by the catch-all
/// "Mixed Breed" and "Unknown" entries.
pub async fn list_breeds(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let names = BreedRepo::list_names(&state.pool).await?;

    Ok(Json(with_sentinels(names)))
}
