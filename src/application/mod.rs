//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide the operations used by
//! HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Find-or-create of short links
//! - [`services::redirect_service::RedirectService`] - Redirect resolution, visit recording and stats

pub mod services;
