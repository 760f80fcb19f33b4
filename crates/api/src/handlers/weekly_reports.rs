//! Handlers for weekly manager reports.
//!
//! Managers (and admins) file one report per project per week. The progress
//! percentage is validated at the DTO layer; a CHECK constraint backs it up
//! in the database.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use staffdesk_core::error::CoreError;
use staffdesk_core::roles::Role;
use staffdesk_core::types::DbId;
use staffdesk_db::models::activity::CreateActivity;
use staffdesk_db::models::weekly_report::{CreateWeeklyReport, WeeklyReport};
use staffdesk_db::repositories::{ActivityRepo, ProjectRepo, WeeklyReportRepo};
use staffdesk_events::DomainEvent;
use validator::Validate;

use crate::audit::{self, RequestMeta};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /reports/weekly`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReportRequest {
    pub project_id: DbId,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    #[validate(length(min = 1, message = "summary must not be empty"))]
    pub summary: String,
    #[validate(range(min = 0, max = 100, message = "progress_pct must be between 0 and 100"))]
    pub progress_pct: i32,
    pub accomplishments: Option<String>,
    pub blockers: Option<String>,
}

/// Query parameters for `GET /reports/weekly`.
#[derive(Debug, Deserialize)]
pub struct ReportListParams {
    pub project_id: Option<DbId>,
    pub manager_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/reports/weekly
///
/// File a weekly report. Manager or admin; managers may only report on
/// projects they lead.
pub async fn create_report(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    meta: RequestMeta,
    Json(input): Json<CreateReportRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<WeeklyReport>>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    if input.week_end < input.week_start {
        return Err(AppError::Core(CoreError::Validation(
            "week_end must not precede week_start".into(),
        )));
    }

    let project = ProjectRepo::find_by_id(&state.pool, input.project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: input.project_id,
        }))?;

    if user.role != Role::Admin && project.manager_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the project manager or an admin may file reports for this project".into(),
        )));
    }

    let create = CreateWeeklyReport {
        manager_id: user.user_id,
        project_id: input.project_id,
        week_start: input.week_start,
        week_end: input.week_end,
        summary: input.summary,
        progress_pct: input.progress_pct,
        accomplishments: input.accomplishments,
        blockers: input.blockers,
    };
    let report = WeeklyReportRepo::create(&state.pool, &create).await?;

    // Activity feed entry; failures here should not fail the submission.
    let activity = CreateActivity {
        activity_type: "report.submitted".to_string(),
        title: format!("Weekly report filed for week of {}", report.week_start),
        project_id: report.project_id,
    };
    if let Err(e) = ActivityRepo::create(&state.pool, &activity).await {
        tracing::error!(error = %e, "Failed to record report activity");
    }

    state.event_bus.publish(
        DomainEvent::new("report.submitted")
            .with_project(report.project_id)
            .with_source("weekly_report", report.id)
            .with_actor(user.user_id)
            .with_payload(serde_json::json!({
                "week_start": report.week_start,
                "progress_pct": report.progress_pct,
            })),
    );

    audit::record(
        &state.pool,
        &meta,
        user.user_id,
        "report.submitted",
        "weekly_report",
        Some(report.id),
        None,
        Some(serde_json::json!({
            "project_id": report.project_id,
            "week_start": report.week_start,
            "progress_pct": report.progress_pct,
        })),
    )
    .await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: report })))
}

/// GET /api/v1/reports/weekly
///
/// List reports filtered by project or manager. Any authenticated user.
pub async fn list_reports(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ReportListParams>,
) -> AppResult<Json<DataResponse<Vec<WeeklyReport>>>> {
    let reports = match (params.project_id, params.manager_id) {
        (Some(project_id), _) => {
            WeeklyReportRepo::list_for_project(&state.pool, project_id).await?
        }
        (None, Some(manager_id)) => {
            WeeklyReportRepo::list_for_manager(&state.pool, manager_id).await?
        }
        // Default to the caller's own reports when no filter is given.
        (None, None) => WeeklyReportRepo::list_for_manager(&state.pool, user.user_id).await?,
    };
    Ok(Json(DataResponse { data: reports }))
}

/// GET /api/v1/reports/weekly/{id}
pub async fn get_report(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<WeeklyReport>>> {
    let report = WeeklyReportRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WeeklyReport",
            id,
        }))?;
    Ok(Json(DataResponse { data: report }))
}
