//! Repository for the `images` table.

use sqlx::PgPool;
use staffdesk_core::types::DbId;

use crate::models::image::{CreateImage, Image, ImageMeta};

const COLUMNS: &str = "id, filename, mime_type, data, uploaded_by, uploaded_at";

const META_COLUMNS: &str = "id, filename, mime_type, uploaded_by, uploaded_at";

/// Provides storage operations for uploaded images.
pub struct ImageRepo;

impl ImageRepo {
    /// Insert a new image, returning its metadata.
    pub async fn create(pool: &PgPool, input: &CreateImage) -> Result<ImageMeta, sqlx::Error> {
        let query = format!(
            "INSERT INTO images (filename, mime_type, data, uploaded_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {META_COLUMNS}"
        );
        sqlx::query_as::<_, ImageMeta>(&query)
            .bind(&input.filename)
            .bind(&input.mime_type)
            .bind(&input.data)
            .bind(input.uploaded_by)
            .fetch_one(pool)
            .await
    }

    /// Fetch an image including its raw bytes.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Image>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE id = $1");
        sqlx::query_as::<_, Image>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List image metadata, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ImageMeta>, sqlx::Error> {
        let query = format!("SELECT {META_COLUMNS} FROM images ORDER BY uploaded_at DESC");
        sqlx::query_as::<_, ImageMeta>(&query).fetch_all(pool).await
    }
}
