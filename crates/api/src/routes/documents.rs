//! Route definitions for top-level `/documents` access by id.
//!
//! Listing and uploading live under `/projects/{id}/documents`.

use axum::routing::get;
use axum::Router;

use crate::handlers::documents;
use crate::state::AppState;

/// Routes mounted at `/documents`.
///
/// ```text
/// GET    /{id} -> download_document (bytes with original content type)
/// DELETE /{id} -> delete_document (owner/manager/admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(documents::download_document).delete(documents::delete_document),
    )
}
