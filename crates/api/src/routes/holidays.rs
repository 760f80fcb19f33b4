//! Route definitions for the `/holidays` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::holidays;
use crate::state::AppState;

/// Routes mounted at `/holidays`.
///
/// ```text
/// GET    /     -> list_holidays (?upcoming)
/// POST   /     -> create_holiday (admin)
/// GET    /{id} -> get_holiday
/// PUT    /{id} -> update_holiday (admin)
/// DELETE /{id} -> delete_holiday (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(holidays::list_holidays).post(holidays::create_holiday),
        )
        .route(
            "/{id}",
            get(holidays::get_holiday)
                .put(holidays::update_holiday)
                .delete(holidays::delete_holiday),
        )
}
