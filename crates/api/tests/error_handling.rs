//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router or
//! database is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use casting_api::auth::AuthError;
use casting_api::error::AppError;
use casting_core::error::CoreError;
use http_body_util::BodyExt;

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_uses_generic_message() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Actor",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 404);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "Request resource not found");
}

#[tokio::test]
async fn empty_collection_is_not_found() {
    let err = AppError::Core(CoreError::EmptyCollection { entity: "Movie" });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], 404);
}

#[tokio::test]
async fn validation_is_unprocessable_and_hides_detail() {
    let err = AppError::Core(CoreError::Validation("age must be between 0 and 150".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"], 422);
    assert_eq!(json["code"], "UNPROCESSABLE_ENTITY");
    assert_eq!(json["message"], "Unprocessable Entity");
}

#[tokio::test]
async fn bad_request_uses_generic_message() {
    let err = AppError::BadRequest("expected value at line 1 column 1".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(
        json["message"],
        "Invalid Request: There is problem with your input data"
    );
}

#[tokio::test]
async fn internal_error_is_sanitized() {
    let err = AppError::Core(CoreError::Internal("gender code 'X' in row 7".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(!json["message"].as_str().unwrap().contains("row 7"));
}

#[tokio::test]
async fn row_not_found_is_404() {
    let (status, _) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn other_database_errors_are_unprocessable() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["message"], "Unprocessable Entity");
}

#[tokio::test]
async fn auth_errors_carry_their_own_status_and_description() {
    let (status, json) = error_to_response(AppError::Auth(AuthError::TokenExpired)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], 401);
    assert_eq!(json["code"], "token_expired");
    assert_eq!(json["message"], "Token expired.");

    let (status, json) = error_to_response(AppError::Auth(AuthError::MissingPermissions)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "invalid_claims");
}
