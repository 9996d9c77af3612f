pub mod breeds;
pub mod dogs;
pub mod health;
pub mod sitemap;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dogs                                            list (?breeds=a,b)
/// /dogs/{id}                                       get
///
/// /breeds                                          list names
///
/// /sitemap                                         dog ids for sitemap.xml
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/dogs", dogs::router())
        .nest("/breeds", breeds::router())
        .nest("/sitemap", sitemap::router())
}
