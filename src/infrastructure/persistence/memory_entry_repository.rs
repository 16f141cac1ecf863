//! In-memory implementation of the entry repository.

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::RwLock;
use serde_json::json;
use std::collections::HashMap;
use tracing::error;

use crate::domain::entities::Entry;
use crate::domain::repositories::EntryRepository;
use crate::error::AppError;

#[derive(Default)]
struct EntryTable {
    by_id: HashMap<String, Entry>,
    /// destination -> id of the most recently inserted entry for it
    by_destination: HashMap<String, String>,
}

/// Process-local repository for entries and visit counters.
///
/// Entries and the destination index share one lock, so a reader always sees
/// both in the same state. Counters live in a sharded map and are incremented
/// under their shard lock, which makes each increment atomic per identifier.
///
/// Nothing survives a restart.
#[derive(Default)]
pub struct InMemoryEntryRepository {
    entries: RwLock<EntryTable>,
    counters: DashMap<String, u64>,
}

impl InMemoryEntryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn exists(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.entries.read().by_id.contains_key(id))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Entry>, AppError> {
        Ok(self.entries.read().by_id.get(id).cloned())
    }

    async fn find_by_destination(&self, destination: &str) -> Result<Option<Entry>, AppError> {
        let table = self.entries.read();

        Ok(table
            .by_destination
            .get(destination)
            .and_then(|id| table.by_id.get(id))
            .cloned())
    }

    async fn insert(&self, entry: Entry) -> Result<(), AppError> {
        let mut table = self.entries.write();

        if table.by_id.contains_key(&entry.id) {
            error!(id = %entry.id, "Refusing to overwrite an existing identifier");
            return Err(AppError::internal(
                "Identifier already in use",
                json!({ "id": entry.id }),
            ));
        }

        table
            .by_destination
            .insert(entry.destination.clone(), entry.id.clone());
        table.by_id.insert(entry.id.clone(), entry);

        Ok(())
    }

    async fn increment_counter(&self, id: &str) -> Result<(), AppError> {
        *self.counters.entry(id.to_string()).or_insert(0) += 1;
        Ok(())
    }

    async fn get_counter(&self, id: &str) -> Result<u64, AppError> {
        Ok(self.counters.get(id).map(|c| *c).unwrap_or(0))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.entries.read().by_id.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, destination: &str) -> Entry {
        Entry::created_now(id.to_string(), destination.to_string())
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryEntryRepository::new();
        repo.insert(entry("abc12", "https://example.com/a"))
            .await
            .unwrap();

        assert!(repo.exists("abc12").await.unwrap());
        assert!(!repo.exists("zzzzz").await.unwrap());

        let found = repo.find_by_id("abc12").await.unwrap().unwrap();
        assert_eq!(found.destination, "https://example.com/a");

        let by_dest = repo
            .find_by_destination("https://example.com/a")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_dest.id, "abc12");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_by_destination_is_exact() {
        let repo = InMemoryEntryRepository::new();
        repo.insert(entry("abc12", "https://example.com/a"))
            .await
            .unwrap();

        assert!(
            repo.find_by_destination("https://example.com/a/")
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            repo.find_by_destination("HTTPS://example.com/a")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_insert_duplicate_id_is_rejected() {
        let repo = InMemoryEntryRepository::new();
        repo.insert(entry("abc12", "https://example.com/a"))
            .await
            .unwrap();

        let result = repo.insert(entry("abc12", "https://example.com/b")).await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
        assert_eq!(repo.count().await.unwrap(), 1);
        assert_eq!(
            repo.find_by_id("abc12").await.unwrap().unwrap().destination,
            "https://example.com/a"
        );
        assert!(
            repo.find_by_destination("https://example.com/b")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_duplicate_destination_last_insert_wins() {
        let repo = InMemoryEntryRepository::new();
        repo.insert(entry("first", "https://example.com/race"))
            .await
            .unwrap();
        repo.insert(entry("secnd", "https://example.com/race"))
            .await
            .unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
        let found = repo
            .find_by_destination("https://example.com/race")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, "secnd");
        assert!(repo.exists("first").await.unwrap());
    }

    #[tokio::test]
    async fn test_counter_defaults_to_zero() {
        let repo = InMemoryEntryRepository::new();
        assert_eq!(repo.get_counter("nobody").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_increment_counter() {
        let repo = InMemoryEntryRepository::new();
        repo.increment_counter("abc12").await.unwrap();
        repo.increment_counter("abc12").await.unwrap();
        repo.increment_counter("other").await.unwrap();

        assert_eq!(repo.get_counter("abc12").await.unwrap(), 2);
        assert_eq!(repo.get_counter("other").await.unwrap(), 1);
    }
}
