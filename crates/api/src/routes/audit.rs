//! Route definitions for `/admin/audit-logs` (admin only).

use axum::routing::get;
use axum::Router;

use crate::handlers::audit;
use crate::state::AppState;

/// Routes mounted at `/admin/audit-logs`.
///
/// ```text
/// GET / -> query_audit_logs (?actor_id, ?action, ?entity_type, ?entity_id,
///                            ?from, ?to, ?limit, ?offset)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(audit::query_audit_logs))
}
