//! Redirect resolution and visit statistics service.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::{mpsc, oneshot};
use tracing::error;

use crate::domain::entities::{Entry, Stats};
use crate::domain::repositories::EntryRepository;
use crate::domain::visit_event::{VisitCommand, VisitEvent};
use crate::error::AppError;

/// Service resolving identifiers and tracking visits.
///
/// Visits are queued to [`crate::domain::visit_worker::run_visit_worker`]
/// instead of being applied inline, so a redirect never waits on the
/// counter update.
pub struct RedirectService<R: EntryRepository> {
    repository: Arc<R>,
    visits: mpsc::UnboundedSender<VisitCommand>,
}

impl<R: EntryRepository> RedirectService<R> {
    /// Creates a new redirect service feeding the given visit queue.
    pub fn new(repository: Arc<R>, visits: mpsc::UnboundedSender<VisitCommand>) -> Self {
        Self { repository, visits }
    }

    /// Looks up the entry for `id`.
    ///
    /// An unknown identifier is `Ok(None)`, not an error.
    pub async fn resolve(&self, id: &str) -> Result<Option<Entry>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Queues one visit of `id` without waiting for it to be counted.
    ///
    /// Visits queued from the same task are counted in the order they were queued.
    pub fn record_visit(&self, id: &str) {
        if self
            .visits
            .send(VisitCommand::Record(VisitEvent::new(id)))
            .is_err()
        {
            error!(id = %id, "Visit queue is closed, visit not recorded");
        }
    }

    /// Waits until every visit queued before this call has been counted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the visit worker is not running.
    pub async fn flush(&self) -> Result<(), AppError> {
        let (ack_tx, ack_rx) = oneshot::channel();

        self.visits
            .send(VisitCommand::Flush(ack_tx))
            .map_err(|_| AppError::internal("Visit queue is closed", json!({})))?;

        ack_rx
            .await
            .map_err(|_| AppError::internal("Visit worker stopped before flushing", json!({})))
    }

    /// Returns `true` while the visit worker is accepting events.
    pub fn is_visit_queue_open(&self) -> bool {
        !self.visits.is_closed()
    }

    /// Assembles the entry and its visit counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entry has this identifier.
    pub async fn stats(&self, id: &str) -> Result<Stats, AppError> {
        let entry = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "id": id })))?;

        let counter = self.repository.get_counter(&entry.id).await?;

        Ok(Stats { entry, counter })
    }

    /// Number of stored entries.
    pub async fn entry_count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}
