use axum::routing::get;
use axum::Router;

use crate::handlers::sitemap;
use crate::state::AppState;

/// Sitemap data route mounted at `/sitemap`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(sitemap::sitemap_data))
}
