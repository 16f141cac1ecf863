//! Entry entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL record.
///
/// Maps a short identifier to the destination it redirects to. Entries are
/// never updated or deleted once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub destination: String,
}

impl Entry {
    /// Creates a new Entry instance.
    pub fn new(id: String, created_at: DateTime<Utc>, destination: String) -> Self {
        Self {
            id,
            created_at,
            destination,
        }
    }

    /// Creates an entry stamped with the current time.
    pub fn created_now(id: String, destination: String) -> Self {
        Self::new(id, Utc::now(), destination)
    }
}

/// Visit statistics for a single entry, computed on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub entry: Entry,
    pub counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let now = Utc::now();
        let entry = Entry::new(
            "abc12".to_string(),
            now,
            "https://example.com".to_string(),
        );

        assert_eq!(entry.id, "abc12");
        assert_eq!(entry.created_at, now);
        assert_eq!(entry.destination, "https://example.com");
    }

    #[test]
    fn test_entry_created_now() {
        let before = Utc::now();
        let entry = Entry::created_now("xyz".to_string(), "https://rust-lang.org".to_string());
        let after = Utc::now();

        assert!(entry.created_at >= before && entry.created_at <= after);
    }

    #[test]
    fn test_stats_holds_entry_and_counter() {
        let entry = Entry::created_now("q-_9Z".to_string(), "https://example.com".to_string());
        let stats = Stats {
            entry: entry.clone(),
            counter: 3,
        };

        assert_eq!(stats.entry, entry);
        assert_eq!(stats.counter, 3);
    }
}
