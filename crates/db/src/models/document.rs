//! Document entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use staffdesk_core::types::{DbId, Timestamp};

/// Full document row, including the stored bytes.
///
/// Only fetched when serving the content itself; listings use
/// [`DocumentMeta`] to avoid pulling BYTEA columns.
#[derive(Debug, Clone, FromRow)]
pub struct Document {
    pub id: DbId,
    pub project_id: DbId,
    pub owner_id: DbId,
    pub filename: String,
    pub mime_type: String,
    pub content: Vec<u8>,
    pub size_bytes: i64,
    pub created_at: Timestamp,
}

/// Document metadata without the content bytes.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DocumentMeta {
    pub id: DbId,
    pub project_id: DbId,
    pub owner_id: DbId,
    pub filename: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub created_at: Timestamp,
}

/// DTO for inserting a new document.
#[derive(Debug)]
pub struct CreateDocument {
    pub project_id: DbId,
    pub owner_id: DbId,
    pub filename: String,
    pub mime_type: String,
    pub content: Vec<u8>,
}
