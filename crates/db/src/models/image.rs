//! Standalone image upload model.

use serde::Serialize;
use sqlx::FromRow;
use staffdesk_core::types::{DbId, Timestamp};

/// Full image row, including raw bytes.
#[derive(Debug, Clone, FromRow)]
pub struct Image {
    pub id: DbId,
    pub filename: String,
    pub mime_type: String,
    pub data: Vec<u8>,
    pub uploaded_by: DbId,
    pub uploaded_at: Timestamp,
}

/// Image metadata without the bytes.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ImageMeta {
    pub id: DbId,
    pub filename: String,
    pub mime_type: String,
    pub uploaded_by: DbId,
    pub uploaded_at: Timestamp,
}

/// DTO for inserting a new image.
#[derive(Debug)]
pub struct CreateImage {
    pub filename: String,
    pub mime_type: String,
    pub data: Vec<u8>,
    pub uploaded_by: DbId,
}
