//! Route definitions for `/reports/weekly`.

use axum::routing::get;
use axum::Router;

use crate::handlers::weekly_reports;
use crate::state::AppState;

/// Routes mounted at `/reports/weekly`.
///
/// ```text
/// GET  /     -> list_reports (?project_id, ?manager_id)
/// POST /     -> create_report (manager/admin)
/// GET  /{id} -> get_report
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(weekly_reports::list_reports).post(weekly_reports::create_report),
        )
        .route("/{id}", get(weekly_reports::get_report))
}
