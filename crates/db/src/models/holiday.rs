//! Holiday calendar model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use staffdesk_core::types::{DbId, Timestamp};

/// A company holiday. `recurring` holidays repeat every year on the same
/// month/day.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Holiday {
    pub id: DbId,
    pub name: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub recurring: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a holiday. The date is already parsed at the handler
/// boundary.
#[derive(Debug)]
pub struct CreateHoliday {
    pub name: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub recurring: bool,
}

/// DTO for updating a holiday. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateHoliday {
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub recurring: Option<bool>,
}
