//! Repository for the `settings` table.

use sqlx::PgPool;
use staffdesk_core::types::DbId;

use crate::models::setting::Setting;

const COLUMNS: &str = "id, key, value, created_by, updated_at";

/// Provides key/value operations for application settings.
pub struct SettingRepo;

impl SettingRepo {
    /// Create or replace a setting by key.
    pub async fn upsert(
        pool: &PgPool,
        key: &str,
        value: &serde_json::Value,
        created_by: DbId,
    ) -> Result<Setting, sqlx::Error> {
        let query = format!(
            "INSERT INTO settings (key, value, created_by)
             VALUES ($1, $2, $3)
             ON CONFLICT (key) DO UPDATE SET value = $2, updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Setting>(&query)
            .bind(key)
            .bind(value)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a setting by key.
    pub async fn find_by_key(pool: &PgPool, key: &str) -> Result<Option<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings WHERE key = $1");
        sqlx::query_as::<_, Setting>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// List all settings ordered by key.
    pub async fn list(pool: &PgPool) -> Result<Vec<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings ORDER BY key");
        sqlx::query_as::<_, Setting>(&query).fetch_all(pool).await
    }

    /// Delete a setting by key. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, key: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM settings WHERE key = $1")
            .bind(key)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
