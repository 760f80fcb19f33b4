//! Authentication and role guard behaviour at the HTTP boundary.
//!
//! These tests exercise the extractors through the full middleware stack;
//! none of them require a database because every request is rejected before
//! a repository call.

mod common;

use axum::body::Body;
use axum::http::header::{ACCESS_CONTROL_REQUEST_METHOD, ORIGIN};
use axum::http::{Method, Request, StatusCode};
use staffdesk_core::roles::Role;
use tower::util::ServiceExt;

use common::{
    body_json, build_test_app, get, get_with_auth_header, get_with_token, token_for, TEST_ORIGIN,
};

// ---------------------------------------------------------------------------
// Authentication extractor
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_authorization_header_is_401() {
    let app = build_test_app();

    let response = get(&app, "/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["code"], "UNAUTHORIZED");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn non_bearer_scheme_is_401() {
    let app = build_test_app();

    let response = get_with_auth_header(&app, "/api/v1/projects", "Token abc123").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_401() {
    let app = build_test_app();

    let response =
        get_with_auth_header(&app, "/api/v1/projects", "Bearer not-a-real-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["code"], "UNAUTHORIZED");
}

// ---------------------------------------------------------------------------
// Admin guard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn employee_on_admin_route_is_403_with_fixed_message() {
    let app = build_test_app();
    let token = token_for(2, Role::Employee);

    let response = get_with_token(&app, "/api/v1/admin/users", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Forbidden: Admins only");
    assert_eq!(body["code"], "FORBIDDEN");
}

#[tokio::test]
async fn manager_on_admin_route_is_403() {
    let app = build_test_app();
    let token = token_for(3, Role::Manager);

    let response = get_with_token(&app, "/api/v1/admin/audit-logs", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Forbidden: Admins only");
}

#[tokio::test]
async fn admin_token_passes_the_guard() {
    let app = build_test_app();
    let token = token_for(1, Role::Admin);

    // With no database the handler fails later, but the guard must not
    // reject the request.
    let response = get_with_token(&app, "/api/v1/admin/users", &token).await;
    assert_ne!(response.status(), StatusCode::UNAUTHORIZED);
    assert_ne!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Manager guard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn employee_cannot_file_weekly_reports() {
    let app = build_test_app();
    let token = token_for(2, Role::Employee);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/reports/weekly")
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({
                "project_id": 1,
                "week_start": "2026-08-17",
                "week_end": "2026-08-21",
                "summary": "on track",
                "progress_pct": 40,
            })
            .to_string(),
        ))
        .expect("request should build");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// CORS
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_allows_configured_origin() {
    let app = build_test_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/auth/login")
        .header(ORIGIN, TEST_ORIGIN)
        .header(ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .expect("request should build");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request should complete");

    let allowed_origin = response
        .headers()
        .get("access-control-allow-origin")
        .and_then(|v| v.to_str().ok());
    assert_eq!(allowed_origin, Some(TEST_ORIGIN));
}
