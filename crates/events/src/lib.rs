//! Staffdesk event bus and notification infrastructure.
//!
//! Building blocks for the application-wide event system:
//!
//! - [`EventBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`DomainEvent`]: the canonical domain event envelope.
//! - [`NotificationFanout`]: background service that turns project events
//!   into per-member notification rows (at-most-once, best-effort).
//! - [`delivery`]: outbound email via SMTP.

pub mod bus;
pub mod delivery;
pub mod fanout;

pub use bus::{DomainEvent, EventBus};
pub use delivery::email::{EmailConfig, EmailMessage, EmailService};
pub use fanout::NotificationFanout;
