//! Route definitions for `/admin/settings` (admin only).

use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/admin/settings`.
///
/// ```text
/// GET    /      -> list_settings
/// PUT    /      -> upsert_setting
/// GET    /{key} -> get_setting
/// DELETE /{key} -> delete_setting
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(settings::list_settings).put(settings::upsert_setting),
        )
        .route(
            "/{key}",
            get(settings::get_setting).delete(settings::delete_setting),
        )
}
