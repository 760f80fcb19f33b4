//! Per-user notification model.

use serde::Serialize;
use sqlx::FromRow;
use staffdesk_core::types::{DbId, Timestamp};

/// A notification delivered to a single user.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    /// Dot-separated event name, e.g. `"document.uploaded"`.
    pub event_type: String,
    pub title: String,
    pub payload: serde_json::Value,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for inserting a notification.
#[derive(Debug, Clone)]
pub struct CreateNotification {
    pub user_id: DbId,
    pub event_type: String,
    pub title: String,
    pub payload: serde_json::Value,
}
