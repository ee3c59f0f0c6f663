//! Integration tests for the public endpoints and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, lazy_pool};
use tower::ServiceExt;

#[tokio::test]
async fn greeting_is_served_without_a_token() {
    for path in ["/", "/health", "/status"] {
        let app = common::build_test_app(lazy_pool());
        let response = get(app, path).await;

        assert_eq!(response.status(), StatusCode::OK, "{path}");
        let json = body_json(response).await;
        assert_eq!(json["message"], "Welcome to Casting Agency");
    }
}

#[tokio::test]
async fn unknown_route_returns_not_found_envelope() {
    let app = common::build_test_app(lazy_pool());
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 404);
    assert_eq!(json["message"], "Request resource not found");
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app(lazy_pool());
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // A generated UUID (36 chars with hyphens).
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn incoming_request_id_is_propagated() {
    let app = common::build_test_app(lazy_pool());
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "trace-me-123")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "trace-me-123");
}

#[tokio::test]
async fn cors_preflight_uses_default_allow_list() {
    let app = common::build_test_app(lazy_pool());
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/actors")
        .header("Origin", "http://casting.example")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "authorization,content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");

    let allow_methods = headers["access-control-allow-methods"].to_str().unwrap();
    for method in ["GET", "POST", "DELETE"] {
        assert!(allow_methods.contains(method), "missing {method} in {allow_methods}");
    }
    assert!(!allow_methods.contains("PATCH"), "got: {allow_methods}");

    let allow_headers = headers["access-control-allow-headers"]
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(allow_headers.contains("authorization"));
    assert!(allow_headers.contains("content-type"));
}

#[tokio::test]
async fn cors_methods_and_origins_are_configurable() {
    let mut config = common::test_config();
    config.cors_origins = vec!["http://localhost:8100".to_string()];
    config.cors_allow_methods.push("PATCH".to_string());
    let app = common::build_test_app_with(lazy_pool(), &config);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/movies/1")
        .header("Origin", "http://localhost:8100")
        .header("Access-Control-Request-Method", "PATCH")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "http://localhost:8100");
    assert!(headers["access-control-allow-methods"]
        .to_str()
        .unwrap()
        .contains("PATCH"));
}
