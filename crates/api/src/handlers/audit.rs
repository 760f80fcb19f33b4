//! Handlers for audit log queries. Admin only.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use staffdesk_core::types::DbId;
use staffdesk_db::models::audit::{AuditLogPage, AuditQuery};
use staffdesk_db::repositories::AuditLogRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for audit log queries. Timestamps arrive as ISO 8601
/// strings and are parsed at the handler boundary.
#[derive(Debug, Deserialize)]
pub struct AuditLogQueryParams {
    pub actor_id: Option<DbId>,
    pub action: Option<String>,
    pub entity_type: Option<String>,
    pub entity_id: Option<DbId>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Parse an optional ISO 8601 timestamp string.
fn parse_timestamp(
    s: &Option<String>,
) -> AppResult<Option<chrono::DateTime<chrono::Utc>>> {
    match s {
        Some(v) => v
            .parse::<chrono::DateTime<chrono::Utc>>()
            .map(Some)
            .map_err(|_| AppError::BadRequest("Invalid date format".into())),
        None => Ok(None),
    }
}

/// GET /api/v1/admin/audit-logs
///
/// Query audit logs with filters and pagination. Admin only.
pub async fn query_audit_logs(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<AuditLogQueryParams>,
) -> AppResult<Json<DataResponse<AuditLogPage>>> {
    let query = AuditQuery {
        actor_id: params.actor_id,
        action: params.action,
        entity_type: params.entity_type,
        entity_id: params.entity_id,
        from: parse_timestamp(&params.from)?,
        to: parse_timestamp(&params.to)?,
        limit: params.limit,
        offset: params.offset,
    };

    let items = AuditLogRepo::query(&state.pool, &query).await?;
    let total = AuditLogRepo::count(&state.pool, &query).await?;

    Ok(Json(DataResponse {
        data: AuditLogPage { items, total },
    }))
}
