//! Event-to-notification fan-out service.
//!
//! [`NotificationFanout`] subscribes to the [`EventBus`](crate::bus::EventBus)
//! broadcast channel and, for every event that targets a project, inserts one
//! notification row per project member. Delivery is at-most-once and
//! best-effort: failures are logged and dropped, and lagged receivers skip
//! events rather than blocking publishers.

use staffdesk_db::models::notification::CreateNotification;
use staffdesk_db::repositories::{NotificationRepo, ProjectRepo};
use staffdesk_db::DbPool;
use tokio::sync::broadcast;

use crate::bus::DomainEvent;

/// Background service that fans project events out to member notifications.
pub struct NotificationFanout {
    pool: DbPool,
}

impl NotificationFanout {
    /// Create a new fan-out service with the given database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run the fan-out loop.
    ///
    /// Subscribes to the event bus via `receiver` and processes each event.
    /// The loop exits when the channel is closed (i.e. the
    /// [`EventBus`](crate::bus::EventBus) is dropped).
    pub async fn run(self, mut receiver: broadcast::Receiver<DomainEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    if let Err(e) = self.fan_out(&event).await {
                        tracing::error!(
                            error = %e,
                            event_type = %event.event_type,
                            "Failed to fan out event"
                        );
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Notification fan-out lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, notification fan-out shutting down");
                    break;
                }
            }
        }
    }

    /// Insert one notification per project member for a single event.
    ///
    /// Events without a `project_id` have no audience and are skipped. The
    /// acting user is excluded from their own notifications. Individual
    /// insert failures are logged and do not stop the remaining members.
    async fn fan_out(&self, event: &DomainEvent) -> Result<(), sqlx::Error> {
        let Some(project_id) = event.project_id else {
            return Ok(());
        };

        let member_ids = ProjectRepo::member_ids(&self.pool, project_id).await?;

        let title = title_for(event);

        for user_id in member_ids {
            if event.actor_user_id == Some(user_id) {
                continue;
            }

            let input = CreateNotification {
                user_id,
                event_type: event.event_type.clone(),
                title: title.clone(),
                payload: event.payload.clone(),
            };

            if let Err(e) = NotificationRepo::create(&self.pool, &input).await {
                tracing::error!(
                    error = %e,
                    user_id,
                    event_type = %event.event_type,
                    "Failed to create notification"
                );
            }
        }

        Ok(())
    }
}

/// Human-readable notification title for an event.
fn title_for(event: &DomainEvent) -> String {
    match event.event_type.as_str() {
        "document.uploaded" => match event.payload.get("filename").and_then(|v| v.as_str()) {
            Some(name) => format!("New document: {name}"),
            None => "New document uploaded".to_string(),
        },
        "report.submitted" => "Weekly report submitted".to_string(),
        "member.added" => "A member joined the project".to_string(),
        "member.removed" => "A member left the project".to_string(),
        other => other.replace('.', " "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_title_uses_filename_when_present() {
        let event = DomainEvent::new("document.uploaded")
            .with_payload(json!({"filename": "handbook.pdf"}));
        assert_eq!(title_for(&event), "New document: handbook.pdf");
    }

    #[test]
    fn document_title_falls_back_without_filename() {
        let event = DomainEvent::new("document.uploaded");
        assert_eq!(title_for(&event), "New document uploaded");
    }

    #[test]
    fn unknown_event_type_is_humanized() {
        let event = DomainEvent::new("project.archived");
        assert_eq!(title_for(&event), "project archived");
    }
}
