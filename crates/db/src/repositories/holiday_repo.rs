//! Repository for the `holidays` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use staffdesk_core::types::DbId;

use crate::models::holiday::{CreateHoliday, Holiday, UpdateHoliday};

const COLUMNS: &str = "id, name, date, description, recurring, created_at, updated_at";

/// Provides CRUD operations for the holiday calendar.
pub struct HolidayRepo;

impl HolidayRepo {
    /// Insert a new holiday, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateHoliday) -> Result<Holiday, sqlx::Error> {
        let query = format!(
            "INSERT INTO holidays (name, date, description, recurring)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Holiday>(&query)
            .bind(&input.name)
            .bind(input.date)
            .bind(&input.description)
            .bind(input.recurring)
            .fetch_one(pool)
            .await
    }

    /// Find a holiday by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Holiday>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM holidays WHERE id = $1");
        sqlx::query_as::<_, Holiday>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all holidays ordered by date.
    pub async fn list(pool: &PgPool) -> Result<Vec<Holiday>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM holidays ORDER BY date");
        sqlx::query_as::<_, Holiday>(&query).fetch_all(pool).await
    }

    /// List holidays falling on or after the given date, plus all recurring
    /// ones (their month/day repeats every year).
    pub async fn list_upcoming(
        pool: &PgPool,
        from: NaiveDate,
    ) -> Result<Vec<Holiday>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM holidays WHERE date >= $1 OR recurring ORDER BY date"
        );
        sqlx::query_as::<_, Holiday>(&query)
            .bind(from)
            .fetch_all(pool)
            .await
    }

    /// Update a holiday. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHoliday,
    ) -> Result<Option<Holiday>, sqlx::Error> {
        let query = format!(
            "UPDATE holidays SET
                name = COALESCE($2, name),
                date = COALESCE($3, date),
                description = COALESCE($4, description),
                recurring = COALESCE($5, recurring),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Holiday>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.date)
            .bind(&input.description)
            .bind(input.recurring)
            .fetch_optional(pool)
            .await
    }

    /// Delete a holiday. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM holidays WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
