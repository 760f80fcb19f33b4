//! Repository for the `documents` table.
//!
//! Listing queries select metadata columns only; the BYTEA content is
//! fetched exclusively by [`DocumentRepo::find_by_id`].

use sqlx::PgPool;
use staffdesk_core::types::DbId;

use crate::models::document::{CreateDocument, Document, DocumentMeta};

const COLUMNS: &str =
    "id, project_id, owner_id, filename, mime_type, content, size_bytes, created_at";

const META_COLUMNS: &str = "id, project_id, owner_id, filename, mime_type, size_bytes, created_at";

/// Provides storage operations for documents.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Insert a new document, returning its metadata.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDocument,
    ) -> Result<DocumentMeta, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents (project_id, owner_id, filename, mime_type, content, size_bytes)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {META_COLUMNS}"
        );
        sqlx::query_as::<_, DocumentMeta>(&query)
            .bind(input.project_id)
            .bind(input.owner_id)
            .bind(&input.filename)
            .bind(&input.mime_type)
            .bind(&input.content)
            .bind(input.content.len() as i64)
            .fetch_one(pool)
            .await
    }

    /// Fetch a document including its content bytes.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents WHERE id = $1");
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a document's metadata only.
    pub async fn find_meta_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DocumentMeta>, sqlx::Error> {
        let query = format!("SELECT {META_COLUMNS} FROM documents WHERE id = $1");
        sqlx::query_as::<_, DocumentMeta>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List document metadata for a project, newest first.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<DocumentMeta>, sqlx::Error> {
        let query = format!(
            "SELECT {META_COLUMNS} FROM documents WHERE project_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, DocumentMeta>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a document. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
