//! Find-or-create service for short links.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::domain::entities::Entry;
use crate::domain::repositories::EntryRepository;
use crate::error::AppError;
use crate::utils::id_generator::IdGenerator;
use crate::utils::uri::validate_destination;

/// Outcome of [`ShortenerService::find_or_create`].
#[derive(Debug, Clone)]
pub struct Shortened {
    pub entry: Entry,
    /// `true` when the entry was created by this call.
    pub is_new: bool,
}

/// Service mapping destinations to short identifiers.
///
/// Submitting the same destination twice returns the same entry.
pub struct ShortenerService<R: EntryRepository> {
    repository: Arc<R>,
    generator: Arc<IdGenerator>,
}

impl<R: EntryRepository> ShortenerService<R> {
    /// Creates a new shortener service.
    pub fn new(repository: Arc<R>, generator: Arc<IdGenerator>) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Returns the entry for `destination`, creating it if needed.
    ///
    /// 1. An entry with exactly this destination exists: return it, `is_new = false`
    /// 2. The destination is not a valid absolute URI: validation error, nothing stored
    /// 3. Otherwise: generate a fresh identifier, store and return it, `is_new = true`
    ///
    /// The lookup and the insert are separate repository calls. Two concurrent
    /// submissions of the same new destination can both create an entry; the
    /// repository then resolves that destination to the later one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an invalid destination.
    /// Returns [`AppError::Internal`] if the identifier space is exhausted or
    /// the insert hits an identifier that is already taken.
    pub async fn find_or_create(&self, destination: &str) -> Result<Shortened, AppError> {
        if let Some(entry) = self.repository.find_by_destination(destination).await? {
            return Ok(Shortened {
                entry,
                is_new: false,
            });
        }

        validate_destination(destination).map_err(|e| {
            AppError::bad_request(
                "Invalid destination URL",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let id = self.generator.next_unique(self.repository.as_ref()).await?;
        let entry = Entry::created_now(id, destination.to_string());

        self.repository.insert(entry.clone()).await?;
        info!(id = %entry.id, destination = %entry.destination, "Short URL created");

        Ok(Shortened {
            entry,
            is_new: true,
        })
    }

    /// Constructs the public short URL for an identifier.
    pub fn short_url(&self, base_url: &str, id: &str) -> String {
        format!("{}/r/{}", base_url.trim_end_matches('/'), id)
    }

    /// Constructs the stats URL for an identifier.
    pub fn stats_url(&self, base_url: &str, id: &str) -> String {
        format!("{}/api/stats/{}", base_url.trim_end_matches('/'), id)
    }
}
