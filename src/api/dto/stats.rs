//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Entry, Stats};

/// Public view of a stored entry.
#[derive(Debug, Serialize)]
pub struct EntryInfo {
    pub id: String,
    pub creation: DateTime<Utc>,
    pub destiny: String,
}

/// Visit statistics for a single short link.
///
/// ```json
/// {
///   "url": {
///     "id": "aB3-x",
///     "creation": "2024-05-01T12:00:00Z",
///     "destiny": "https://example.com"
///   },
///   "counter": 42
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub url: EntryInfo,
    pub counter: u64,
}

impl From<Entry> for EntryInfo {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id,
            creation: entry.created_at,
            destiny: entry.destination,
        }
    }
}

impl From<Stats> for StatsResponse {
    fn from(stats: Stats) -> Self {
        Self {
            url: stats.entry.into(),
            counter: stats.counter,
        }
    }
}
