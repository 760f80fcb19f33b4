//! Weekly manager report model and DTOs.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use staffdesk_core::types::{DbId, Timestamp};

/// A weekly progress report filed by a project's manager.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WeeklyReport {
    pub id: DbId,
    pub manager_id: DbId,
    pub project_id: DbId,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub summary: String,
    /// Progress percentage, 0..=100. Enforced by the request DTO and a
    /// CHECK constraint.
    pub progress_pct: i32,
    pub accomplishments: Option<String>,
    pub blockers: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a weekly report. Range validation happens at the
/// handler boundary before this is constructed.
#[derive(Debug)]
pub struct CreateWeeklyReport {
    pub manager_id: DbId,
    pub project_id: DbId,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub summary: String,
    pub progress_pct: i32,
    pub accomplishments: Option<String>,
    pub blockers: Option<String>,
}
