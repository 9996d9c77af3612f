//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no HTTP server or
//! database is needed.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use tailspin_api::error::AppError;
use tailspin_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404_with_entity_message() {
    let err = AppError::Core(CoreError::NotFound { entity: "Dog", id: 42 });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({ "error": "Dog not found" }));
}

#[tokio::test]
async fn unmatched_path_renders_like_a_miss() {
    let (status, json) = error_to_response(AppError::UnmatchedPath("Dog")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({ "error": "Dog not found" }));
}

#[tokio::test]
async fn core_internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::Core(CoreError::Internal("dog 7 has unknown status 'lost'".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        !json.to_string().contains("lost"),
        "Internal error response must not leak details"
    );
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn sqlx_errors_convert_and_return_500() {
    let err: AppError = sqlx::Error::PoolTimedOut.into();
    assert_matches!(err, AppError::Database(sqlx::Error::PoolTimedOut));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({ "error": "An internal error occurred" }));
}

#[tokio::test]
async fn core_errors_convert_via_question_mark() {
    fn lookup() -> Result<(), AppError> {
        Err::<(), _>(CoreError::NotFound { entity: "Dog", id: 1 })?;
        Ok(())
    }

    assert_matches!(
        lookup(),
        Err(AppError::Core(CoreError::NotFound { entity: "Dog", id: 1 }))
    );
}
