#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use tailspin_api::config::ServerConfig;
use tailspin_api::router::build_app_router;
use tailspin_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:4321".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

/// Router over a pool whose server never answers; every query fails fast.
pub fn build_unreachable_app() -> Router {
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(250))
        .connect_lazy("postgres://tailspin@127.0.0.1:1/tailspin")
        .unwrap();
    build_test_app(pool)
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn insert_breed(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO breeds (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_dog(
    pool: &PgPool,
    name: &str,
    breed_id: i64,
    gender: &str,
    status: &str,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO dogs (name, breed_id, age, description, gender, status) \
         VALUES ($1, $2, 3, 'Friendly and house trained', $3, $4) RETURNING id",
    )
    .bind(name)
    .bind(breed_id)
    .bind(gender)
    .bind(status)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Seed the two-breed fixture: Labrador (Rex), Beagle (Fido).
///
/// Returns `(rex_id, fido_id)`.
pub async fn seed_rex_and_fido(pool: &PgPool) -> (i64, i64) {
    let lab = insert_breed(pool, "Labrador").await;
    let beagle = insert_breed(pool, "Beagle").await;
    let rex = insert_dog(pool, "Rex", lab, "male", "available").await;
    let fido = insert_dog(pool, "Fido", beagle, "female", "adopted").await;
    (rex, fido)
}
