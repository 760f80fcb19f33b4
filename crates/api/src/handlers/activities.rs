//! Handlers for project activity feeds.
//!
//! Activities are recorded by other controllers as a side effect (uploads,
//! report submissions); this module only exposes the read side.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use staffdesk_core::error::CoreError;
use staffdesk_core::types::DbId;
use staffdesk_db::models::activity::Activity;
use staffdesk_db::repositories::{ActivityRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// Default number of feed entries returned when no limit is given.
const DEFAULT_FEED_LIMIT: i64 = 50;

/// Hard cap on feed entries per request.
const MAX_FEED_LIMIT: i64 = 200;

/// Query parameters for the activity feed.
#[derive(Debug, Deserialize)]
pub struct FeedParams {
    pub limit: Option<i64>,
}

/// GET /api/v1/projects/{id}/activities
///
/// List a project's activity feed, newest first. Any authenticated user.
pub async fn list_activities(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(project_id): Path<DbId>,
    Query(params): Query<FeedParams>,
) -> AppResult<Json<DataResponse<Vec<Activity>>>> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    let limit = params
        .limit
        .unwrap_or(DEFAULT_FEED_LIMIT)
        .clamp(1, MAX_FEED_LIMIT);

    let activities = ActivityRepo::list_for_project(&state.pool, project_id, limit).await?;
    Ok(Json(DataResponse { data: activities }))
}
