//! Cross-cutting HTTP behaviour: health endpoint, request ids, CORS.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use tower::ServiceExt;

#[tokio::test]
async fn health_reports_ok() {
    let test = common::build_test_app();

    let response = get(test.app.clone(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    // No Postgres behind the test store, so the probe trivially passes.
    assert_eq!(json["db_healthy"], true);
}

#[tokio::test]
async fn unknown_routes_are_404() {
    let test = common::build_test_app();
    let response = get(test.app.clone(), "/api/v2/games").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn every_response_carries_a_request_id() {
    let test = common::build_test_app();
    let response = get(test.app.clone(), "/health").await;

    let header = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id header should be set");
    // MakeRequestUuid produces hyphenated UUIDs.
    assert_eq!(header.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn cors_preflight_admits_the_configured_origin() {
    let test = common::build_test_app();

    let preflight = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/games")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "GET")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let response = test.app.clone().oneshot(preflight).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "http://localhost:5173"
    );
    let methods = headers
        .get("access-control-allow-methods")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("GET") && methods.contains("POST"), "got: {methods}");
}

#[tokio::test]
async fn cors_rejects_unknown_origins() {
    let test = common::build_test_app();

    let preflight = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/games")
        .header("Origin", "https://evil.example")
        .header("Access-Control-Request-Method", "GET")
        .body(Body::empty())
        .unwrap();
    let response = test.app.clone().oneshot(preflight).await.unwrap();

    assert!(response.headers().get("access-control-allow-origin").is_none());
}
