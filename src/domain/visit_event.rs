//! Visit event model for asynchronous counter updates.

use chrono::{DateTime, Utc};
use tokio::sync::oneshot;

/// A single redirect served for an identifier.
///
/// Created by the redirect path and handed to the background worker, so the
/// HTTP response never waits on the counter update.
#[derive(Debug, Clone)]
pub struct VisitEvent {
    pub id: String,
    pub visited_at: DateTime<Utc>,
}

impl VisitEvent {
    /// Creates a visit event stamped with the current time.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            visited_at: Utc::now(),
        }
    }
}

/// Messages accepted by [`crate::domain::visit_worker::run_visit_worker`].
#[derive(Debug)]
pub enum VisitCommand {
    /// Increment the counter of the event's identifier.
    Record(VisitEvent),
    /// Acknowledge once every command queued before this one has been applied.
    Flush(oneshot::Sender<()>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_event_creation() {
        let before = Utc::now();
        let event = VisitEvent::new("abc12");

        assert_eq!(event.id, "abc12");
        assert!(event.visited_at >= before);
    }

    #[test]
    fn test_visit_event_clone() {
        let event = VisitEvent::new("zz-_0".to_string());
        let cloned = event.clone();

        assert_eq!(cloned.id, event.id);
        assert_eq!(cloned.visited_at, event.visited_at);
    }
}
