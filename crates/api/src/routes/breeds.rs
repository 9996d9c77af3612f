use axum::routing::get;
use axum::Router;

use crate::handlers::breeds;
use crate::state::AppState;

/// Breed routes mounted at `/breeds`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(breeds::list_breeds))
}
