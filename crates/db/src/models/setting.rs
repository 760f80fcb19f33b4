//! Key/value application settings.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use staffdesk_core::types::{DbId, Timestamp};

/// An application setting. Values are free-form JSON so callers keep
/// flexibility without losing serialization safety.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Setting {
    pub id: DbId,
    pub key: String,
    pub value: serde_json::Value,
    pub created_by: Option<DbId>,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a setting by key.
#[derive(Debug, Deserialize)]
pub struct UpsertSetting {
    pub key: String,
    pub value: serde_json::Value,
}
