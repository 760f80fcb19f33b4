//! Repository for the `weekly_reports` table.

use sqlx::PgPool;
use staffdesk_core::types::DbId;

use crate::models::weekly_report::{CreateWeeklyReport, WeeklyReport};

const COLUMNS: &str = "\
    id, manager_id, project_id, week_start, week_end, summary, \
    progress_pct, accomplishments, blockers, created_at";

/// Provides insert and list operations for weekly reports.
pub struct WeeklyReportRepo;

impl WeeklyReportRepo {
    /// Insert a new weekly report, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateWeeklyReport,
    ) -> Result<WeeklyReport, sqlx::Error> {
        let query = format!(
            "INSERT INTO weekly_reports
                (manager_id, project_id, week_start, week_end, summary,
                 progress_pct, accomplishments, blockers)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WeeklyReport>(&query)
            .bind(input.manager_id)
            .bind(input.project_id)
            .bind(input.week_start)
            .bind(input.week_end)
            .bind(&input.summary)
            .bind(input.progress_pct)
            .bind(&input.accomplishments)
            .bind(&input.blockers)
            .fetch_one(pool)
            .await
    }

    /// Find a report by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<WeeklyReport>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM weekly_reports WHERE id = $1");
        sqlx::query_as::<_, WeeklyReport>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's reports, most recent week first.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<WeeklyReport>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM weekly_reports
             WHERE project_id = $1
             ORDER BY week_start DESC"
        );
        sqlx::query_as::<_, WeeklyReport>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List reports filed by a manager, most recent week first.
    pub async fn list_for_manager(
        pool: &PgPool,
        manager_id: DbId,
    ) -> Result<Vec<WeeklyReport>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM weekly_reports
             WHERE manager_id = $1
             ORDER BY week_start DESC"
        );
        sqlx::query_as::<_, WeeklyReport>(&query)
            .bind(manager_id)
            .fetch_all(pool)
            .await
    }
}
