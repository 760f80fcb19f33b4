//! Handlers for `/admin/settings` (key/value application settings).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use staffdesk_core::error::CoreError;
use staffdesk_db::models::setting::{Setting, UpsertSetting};
use staffdesk_db::repositories::SettingRepo;

use crate::audit::{self, RequestMeta};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/settings
///
/// List all settings. Admin only.
pub async fn list_settings(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<Setting>>>> {
    let settings = SettingRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: settings }))
}

/// GET /api/v1/admin/settings/{key}
///
/// Fetch a single setting by key. Admin only.
pub async fn get_setting(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(key): Path<String>,
) -> AppResult<Json<DataResponse<Setting>>> {
    let setting = SettingRepo::find_by_key(&state.pool, &key)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Setting '{key}' not found")))?;
    Ok(Json(DataResponse { data: setting }))
}

/// PUT /api/v1/admin/settings
///
/// Create or replace a setting by key. Admin only.
pub async fn upsert_setting(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    meta: RequestMeta,
    Json(input): Json<UpsertSetting>,
) -> AppResult<Json<DataResponse<Setting>>> {
    if input.key.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Setting key must not be empty".into(),
        )));
    }

    let before = SettingRepo::find_by_key(&state.pool, &input.key).await?;

    let setting = SettingRepo::upsert(&state.pool, &input.key, &input.value, admin.user_id).await?;

    audit::record(
        &state.pool,
        &meta,
        admin.user_id,
        "setting.upserted",
        "setting",
        Some(setting.id),
        before.map(|s| s.value),
        Some(setting.value.clone()),
    )
    .await;

    Ok(Json(DataResponse { data: setting }))
}

/// DELETE /api/v1/admin/settings/{key}
///
/// Delete a setting by key. Admin only.
pub async fn delete_setting(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    meta: RequestMeta,
    Path(key): Path<String>,
) -> AppResult<StatusCode> {
    let deleted = SettingRepo::delete(&state.pool, &key).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Setting '{key}' not found")));
    }

    audit::record(
        &state.pool,
        &meta,
        admin.user_id,
        "setting.deleted",
        "setting",
        None,
        Some(serde_json::json!({ "key": key })),
        None,
    )
    .await;

    Ok(StatusCode::NO_CONTENT)
}
