use axum::routing::get;
use axum::Router;

use crate::handlers::dogs;
use crate::state::AppState;

/// Dog routes mounted at `/dogs`.
///
/// ```text
/// GET    /                  -> list_dogs
/// GET    /{id}              -> get_dog
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dogs::list_dogs))
        .route("/{id}", get(dogs::get_dog))
}
