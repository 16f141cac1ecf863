//! Business logic services for the application layer.

pub mod redirect_service;
pub mod shortener_service;

pub use redirect_service::RedirectService;
pub use shortener_service::{Shortened, ShortenerService};
