use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: staffdesk_db::DbPool,
    /// Server configuration (JWT secret, timeouts, CORS origins).
    pub config: Arc<ServerConfig>,
    /// Centralized event bus; handlers publish domain events here and the
    /// notification fan-out task consumes them.
    pub event_bus: Arc<staffdesk_events::EventBus>,
    /// SMTP email service. `None` when `SMTP_HOST` is not configured, in
    /// which case handlers skip email delivery.
    pub email: Option<Arc<staffdesk_events::EmailService>>,
}
