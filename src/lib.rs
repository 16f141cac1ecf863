//! # URL Shortener
//!
//! A small URL shortening service built with Axum. Short links and their
//! visit counters are kept in process memory.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, the repository trait and the visit worker
//! - **Application Layer** ([`application`]) - Find-or-create and redirect/stats services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory repository
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! ## Features
//!
//! - Random 5-character identifiers from a 64-symbol alphabet, collision-checked
//! - Idempotent shortening: the same destination always yields the same link
//! - Asynchronous visit counting through a single background worker
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- --port 8888
//!
//! curl -i -X POST --data 'https://www.rust-lang.org' http://localhost:8888/api/shorten
//! curl -i http://localhost:8888/r/<id>
//! curl http://localhost:8888/api/stats/<id>
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{RedirectService, Shortened, ShortenerService};
    pub use crate::domain::entities::{Entry, Stats};
    pub use crate::domain::repositories::EntryRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryEntryRepository;
    pub use crate::state::AppState;
}
