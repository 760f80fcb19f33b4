//! Handlers for the company holiday calendar.
//!
//! Reads are open to any authenticated user; writes are admin only. Incoming
//! date strings are parsed with the tolerant `safe_date` helper so both
//! RFC 3339 timestamps and plain `YYYY-MM-DD` dates are accepted.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use staffdesk_core::dates::safe_date;
use staffdesk_core::error::CoreError;
use staffdesk_core::types::DbId;
use staffdesk_db::models::holiday::{CreateHoliday, Holiday, UpdateHoliday};
use staffdesk_db::repositories::HolidayRepo;

use crate::audit::{self, RequestMeta};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /holidays`. The date arrives as a string and is
/// parsed at the handler boundary.
#[derive(Debug, Deserialize)]
pub struct CreateHolidayRequest {
    pub name: String,
    pub date: String,
    pub description: Option<String>,
    #[serde(default)]
    pub recurring: bool,
}

/// Request body for `PUT /holidays/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateHolidayRequest {
    pub name: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub recurring: Option<bool>,
}

/// Query parameters for `GET /holidays`.
#[derive(Debug, Deserialize)]
pub struct HolidayListParams {
    /// When `true`, only holidays from today onward (plus recurring ones).
    #[serde(default)]
    pub upcoming: bool,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a user-supplied date string into a calendar date, or 400.
fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    safe_date(raw)
        .map(|dt| dt.date_naive())
        .ok_or_else(|| AppError::BadRequest(format!("Invalid date: {raw}")))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/holidays
///
/// List holidays, oldest first. Any authenticated user.
pub async fn list_holidays(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(params): Query<HolidayListParams>,
) -> AppResult<Json<DataResponse<Vec<Holiday>>>> {
    let holidays = if params.upcoming {
        let today = chrono::Utc::now().date_naive();
        HolidayRepo::list_upcoming(&state.pool, today).await?
    } else {
        HolidayRepo::list(&state.pool).await?
    };
    Ok(Json(DataResponse { data: holidays }))
}

/// GET /api/v1/holidays/{id}
pub async fn get_holiday(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Holiday>>> {
    let holiday = HolidayRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Holiday",
            id,
        }))?;
    Ok(Json(DataResponse { data: holiday }))
}

/// POST /api/v1/holidays
///
/// Create a holiday. Admin only.
pub async fn create_holiday(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    meta: RequestMeta,
    Json(input): Json<CreateHolidayRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Holiday>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Holiday name must not be empty".into(),
        )));
    }
    let date = parse_date(&input.date)?;

    let create = CreateHoliday {
        name: input.name,
        date,
        description: input.description,
        recurring: input.recurring,
    };
    let holiday = HolidayRepo::create(&state.pool, &create).await?;

    audit::record(
        &state.pool,
        &meta,
        admin.user_id,
        "holiday.created",
        "holiday",
        Some(holiday.id),
        None,
        Some(serde_json::json!({ "name": &holiday.name, "date": holiday.date })),
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: holiday }),
    ))
}

/// PUT /api/v1/holidays/{id}
///
/// Update a holiday. Admin only.
pub async fn update_holiday(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    meta: RequestMeta,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHolidayRequest>,
) -> AppResult<Json<DataResponse<Holiday>>> {
    let date = match input.date {
        Some(ref raw) => Some(parse_date(raw)?),
        None => None,
    };

    let update = UpdateHoliday {
        name: input.name,
        date,
        description: input.description,
        recurring: input.recurring,
    };
    let holiday = HolidayRepo::update(&state.pool, id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Holiday",
            id,
        }))?;

    audit::record(
        &state.pool,
        &meta,
        admin.user_id,
        "holiday.updated",
        "holiday",
        Some(id),
        None,
        Some(serde_json::json!({ "name": &holiday.name, "date": holiday.date })),
    )
    .await;

    Ok(Json(DataResponse { data: holiday }))
}

/// DELETE /api/v1/holidays/{id}
///
/// Delete a holiday. Admin only.
pub async fn delete_holiday(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    meta: RequestMeta,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = HolidayRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Holiday",
            id,
        }));
    }

    audit::record(
        &state.pool,
        &meta,
        admin.user_id,
        "holiday.deleted",
        "holiday",
        Some(id),
        None,
        None,
    )
    .await;

    Ok(StatusCode::NO_CONTENT)
}
