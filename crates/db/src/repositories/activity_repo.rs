//! Repository for the `activities` table.

use sqlx::PgPool;
use staffdesk_core::types::DbId;

use crate::models::activity::{Activity, CreateActivity};

const COLUMNS: &str = "id, activity_type, title, project_id, created_at, updated_at";

/// Provides insert and list operations for the project activity feed.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Record a new activity, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateActivity) -> Result<Activity, sqlx::Error> {
        let query = format!(
            "INSERT INTO activities (activity_type, title, project_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(&input.activity_type)
            .bind(&input.title)
            .bind(input.project_id)
            .fetch_one(pool)
            .await
    }

    /// List a project's activities, newest first, capped at `limit`.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
        limit: i64,
    ) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activities
             WHERE project_id = $1
             ORDER BY created_at DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(project_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
