//! Route definitions for the `/images` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::images;
use crate::state::AppState;

/// Routes mounted at `/images`.
///
/// ```text
/// GET  /     -> list_images
/// POST /     -> upload_image (multipart)
/// GET  /{id} -> get_image (bytes with original content type)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(images::list_images).post(images::upload_image))
        .route("/{id}", get(images::get_image))
}
