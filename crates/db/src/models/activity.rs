//! Project activity feed model.

use serde::Serialize;
use sqlx::FromRow;
use staffdesk_core::types::{DbId, Timestamp};

/// One entry in a project's activity feed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Activity {
    pub id: DbId,
    pub activity_type: String,
    pub title: String,
    pub project_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording an activity. Controllers write these as a side effect
/// of domain actions (uploads, reports).
#[derive(Debug)]
pub struct CreateActivity {
    pub activity_type: String,
    pub title: String,
    pub project_id: DbId,
}
