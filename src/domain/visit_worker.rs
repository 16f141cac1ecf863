//! Background worker applying visit events to the repository.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::domain::repositories::EntryRepository;
use crate::domain::visit_event::VisitCommand;

/// Drains the visit queue, incrementing one counter per event.
///
/// A single worker consumes the channel, so increments for the same
/// identifier are applied in the order the visits were queued. Runs until
/// every sender has been dropped.
pub async fn run_visit_worker<R>(mut rx: mpsc::UnboundedReceiver<VisitCommand>, repository: Arc<R>)
where
    R: EntryRepository + ?Sized,
{
    while let Some(command) = rx.recv().await {
        match command {
            VisitCommand::Record(event) => {
                if let Err(e) = repository.increment_counter(&event.id).await {
                    error!(id = %event.id, "Failed to register redirect: {}", e);
                    continue;
                }
                debug!(id = %event.id, visited_at = %event.visited_at, "Redirect registered");
            }
            VisitCommand::Flush(ack) => {
                let _ = ack.send(());
            }
        }
    }

    debug!("Visit queue closed, worker stopping");
}
