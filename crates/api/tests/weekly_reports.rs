//! Input validation for weekly report submission.
//!
//! Validation runs before any repository call, so these tests need no
//! database: a rejected body must come back as 400 without touching it.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use staffdesk_core::roles::Role;
use tower::util::ServiceExt;

use common::{body_json, build_test_app, token_for};

async fn submit_report(body: serde_json::Value) -> axum::response::Response {
    let app = build_test_app();
    let token = token_for(3, Role::Manager);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/reports/weekly")
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");

    app.oneshot(request).await.expect("request should complete")
}

fn report_body(progress_pct: i32) -> serde_json::Value {
    serde_json::json!({
        "project_id": 1,
        "week_start": "2026-08-17",
        "week_end": "2026-08-21",
        "summary": "on track",
        "progress_pct": progress_pct,
    })
}

#[tokio::test]
async fn progress_over_one_hundred_is_rejected() {
    let response = submit_report(report_body(101)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn negative_progress_is_rejected() {
    let response = submit_report(report_body(-1)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn progress_boundaries_pass_validation() {
    // 0 and 100 are valid; with no database the handler fails later, but
    // never with a validation error.
    for pct in [0, 100] {
        let response = submit_report(report_body(pct)).await;
        assert_ne!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn empty_summary_is_rejected() {
    let mut body = report_body(50);
    body["summary"] = serde_json::json!("");
    let response = submit_report(body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn week_end_before_week_start_is_rejected() {
    let mut body = report_body(50);
    body["week_end"] = serde_json::json!("2026-08-10");
    let response = submit_report(body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
