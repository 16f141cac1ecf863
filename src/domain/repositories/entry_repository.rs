//! Repository trait for shortened URL entries and their visit counters.

use crate::domain::entities::Entry;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage capability for entries and visit counters.
///
/// The repository is the exclusive owner of all entry and counter state.
/// Services only ever hold clones returned from lookups.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryEntryRepository`] - process-local storage
/// - Test mocks available with `cfg(test)`
///
/// # Concurrency
///
/// Implementations must be safe to share between request handlers: no lost
/// counter increments, no half-constructed entries visible to readers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Returns `true` if an entry with this identifier exists.
    async fn exists(&self, id: &str) -> Result<bool, AppError>;

    /// Finds an entry by its identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<Entry>, AppError>;

    /// Finds an entry by its exact destination string.
    ///
    /// No normalization is applied; the match is byte-for-byte.
    async fn find_by_destination(&self, destination: &str) -> Result<Option<Entry>, AppError>;

    /// Stores a new entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the identifier is already taken. Callers
    /// are expected to check [`Self::exists`] first, so this is an invariant violation.
    async fn insert(&self, entry: Entry) -> Result<(), AppError>;

    /// Adds one to the visit counter of `id`, creating it at zero first if absent.
    async fn increment_counter(&self, id: &str) -> Result<(), AppError>;

    /// Current visit counter of `id`, `0` if nothing was recorded yet.
    async fn get_counter(&self, id: &str) -> Result<u64, AppError>;

    /// Number of stored entries.
    async fn count(&self) -> Result<usize, AppError>;
}
