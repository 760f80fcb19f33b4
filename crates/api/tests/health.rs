//! Health endpoint behaviour without a reachable database.

mod common;

use axum::http::StatusCode;

use common::{body_json, build_test_app, get};

#[tokio::test]
async fn health_returns_ok_envelope() {
    let app = build_test_app();

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    // The database is unreachable in tests, so the service reports degraded.
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["db_healthy"], false);
    assert!(
        body["version"].as_str().is_some_and(|v| !v.is_empty()),
        "version should be a non-empty string"
    );
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = build_test_app();

    let response = get(&app, "/api/v1/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = build_test_app();

    let response = get(&app, "/health").await;
    let request_id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok());
    assert!(
        request_id.is_some_and(|id| !id.is_empty()),
        "x-request-id header should be set on every response"
    );
}
