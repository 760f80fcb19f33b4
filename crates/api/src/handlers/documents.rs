//! Handlers for project documents (multipart upload, download, delete).

use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use staffdesk_core::error::CoreError;
use staffdesk_core::roles::Role;
use staffdesk_core::types::DbId;
use staffdesk_db::models::activity::CreateActivity;
use staffdesk_db::models::document::{CreateDocument, DocumentMeta};
use staffdesk_db::repositories::{ActivityRepo, DocumentRepo, ProjectRepo};
use staffdesk_events::DomainEvent;

use crate::audit::{self, RequestMeta};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum accepted document size in bytes (10 MiB).
const MAX_DOCUMENT_SIZE: usize = 10 * 1024 * 1024;

/// Content type used when the client does not provide one.
const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/projects/{id}/documents
///
/// List document metadata for a project, newest first. Project members,
/// the manager, and admins.
pub async fn list_documents(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<DocumentMeta>>>> {
    ensure_project_access(&state, &user.role, user.user_id, project_id).await?;
    let documents = DocumentRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: documents }))
}

/// POST /api/v1/projects/{id}/documents
///
/// Upload a document via multipart form data. The `file` field is required.
/// Publishes a `document.uploaded` event and records a project activity.
pub async fn upload_document(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    meta: RequestMeta,
    Path(project_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<DocumentMeta>>)> {
    ensure_project_access(&state, &user.role, user.user_id, project_id).await?;

    let mut file_data: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload.bin").to_string();
                let mime_type = field
                    .content_type()
                    .unwrap_or(DEFAULT_MIME_TYPE)
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file_data = Some((filename, mime_type, data.to_vec()));
            }
            _ => {} // ignore unknown fields
        }
    }

    let (filename, mime_type, content) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    if content.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }
    if content.len() > MAX_DOCUMENT_SIZE {
        return Err(AppError::BadRequest(format!(
            "File exceeds maximum size of {MAX_DOCUMENT_SIZE} bytes"
        )));
    }

    let create = CreateDocument {
        project_id,
        owner_id: user.user_id,
        filename,
        mime_type,
        content,
    };
    let document = DocumentRepo::create(&state.pool, &create).await?;

    // Activity feed entry; failures here should not fail the upload.
    let activity = CreateActivity {
        activity_type: "document.uploaded".to_string(),
        title: format!("Document '{}' uploaded", document.filename),
        project_id,
    };
    if let Err(e) = ActivityRepo::create(&state.pool, &activity).await {
        tracing::error!(error = %e, "Failed to record upload activity");
    }

    state.event_bus.publish(
        DomainEvent::new("document.uploaded")
            .with_project(project_id)
            .with_source("document", document.id)
            .with_actor(user.user_id)
            .with_payload(serde_json::json!({ "filename": &document.filename })),
    );

    audit::record(
        &state.pool,
        &meta,
        user.user_id,
        "document.uploaded",
        "document",
        Some(document.id),
        None,
        Some(serde_json::json!({
            "filename": &document.filename,
            "size_bytes": document.size_bytes,
        })),
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: document }),
    ))
}

/// GET /api/v1/documents/{id}
///
/// Fetch the stored bytes with the original content type and filename.
pub async fn download_document(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let document = DocumentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Document",
            id,
        }))?;

    ensure_project_access(&state, &user.role, user.user_id, document.project_id).await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, &document.mime_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", document.filename),
        )
        .body(axum::body::Body::from(document.content))
        .map_err(|e| AppError::InternalError(format!("Response build error: {e}")))?;

    Ok(response.into_response())
}

/// DELETE /api/v1/documents/{id}
///
/// Delete a document. Owner, project manager, or admin.
pub async fn delete_document(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    meta: RequestMeta,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let document = DocumentRepo::find_meta_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Document",
            id,
        }))?;

    let allowed = user.role == Role::Admin
        || document.owner_id == user.user_id
        || is_project_manager(&state, user.user_id, document.project_id).await?;
    if !allowed {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the owner, project manager, or an admin may delete this document".into(),
        )));
    }

    DocumentRepo::delete(&state.pool, id).await?;

    audit::record(
        &state.pool,
        &meta,
        user.user_id,
        "document.deleted",
        "document",
        Some(id),
        Some(serde_json::json!({ "filename": &document.filename })),
        None,
    )
    .await;

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Access helpers
// ---------------------------------------------------------------------------

/// Members, the project manager, and admins may access project documents.
async fn ensure_project_access(
    state: &AppState,
    role: &Role,
    user_id: DbId,
    project_id: DbId,
) -> AppResult<()> {
    let project = ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    if *role == Role::Admin || project.manager_id == user_id {
        return Ok(());
    }

    if ProjectRepo::is_member(&state.pool, project_id, user_id).await? {
        return Ok(());
    }

    Err(AppError::Core(CoreError::Forbidden(
        "Not a member of this project".into(),
    )))
}

/// True when the user manages the given project.
async fn is_project_manager(
    state: &AppState,
    user_id: DbId,
    project_id: DbId,
) -> AppResult<bool> {
    let project = ProjectRepo::find_by_id(&state.pool, project_id).await?;
    Ok(project.is_some_and(|p| p.manager_id == user_id))
}
