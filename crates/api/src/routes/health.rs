use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct GreetingResponse {
    message: &'static str,
}

async fn greet() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: "Welcome to Casting Agency",
    })
}

/// Public liveness routes. No token required.
///
/// ```text
/// GET /        -> greet
/// GET /health  -> greet
/// GET /status  -> greet
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(greet))
        .route("/health", get(greet))
        .route("/status", get(greet))
}
