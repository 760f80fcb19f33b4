//! Handlers for standalone image uploads (avatars, attachments).

use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use staffdesk_core::error::CoreError;
use staffdesk_core::types::DbId;
use staffdesk_db::models::image::{CreateImage, ImageMeta};
use staffdesk_db::repositories::ImageRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum accepted image size in bytes (5 MiB).
const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

/// Accepted image content types.
const SUPPORTED_IMAGE_TYPES: &[&str] = &["image/png", "image/jpeg", "image/gif", "image/webp"];

/// GET /api/v1/images
///
/// List image metadata, newest first. Any authenticated user.
pub async fn list_images(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<ImageMeta>>>> {
    let images = ImageRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: images }))
}

/// POST /api/v1/images
///
/// Upload an image via multipart form data. The `file` field is required
/// and must carry a supported image content type.
pub async fn upload_image(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<ImageMeta>>)> {
    let mut file_data: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("image.png").to_string();
                let mime_type = field.content_type().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file_data = Some((filename, mime_type, data.to_vec()));
            }
            _ => {} // ignore unknown fields
        }
    }

    let (filename, mime_type, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    if !SUPPORTED_IMAGE_TYPES.contains(&mime_type.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Unsupported image type: {mime_type}"
        )));
    }
    if data.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }
    if data.len() > MAX_IMAGE_SIZE {
        return Err(AppError::BadRequest(format!(
            "Image exceeds maximum size of {MAX_IMAGE_SIZE} bytes"
        )));
    }

    let create = CreateImage {
        filename,
        mime_type,
        data,
        uploaded_by: user.user_id,
    };
    let image = ImageRepo::create(&state.pool, &create).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: image })))
}

/// GET /api/v1/images/{id}
///
/// Serve the stored image bytes with the original content type.
pub async fn get_image(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let image = ImageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Image",
            id,
        }))?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, &image.mime_type)
        .body(axum::body::Body::from(image.data))
        .map_err(|e| AppError::InternalError(format!("Response build error: {e}")))?;

    Ok(response.into_response())
}
