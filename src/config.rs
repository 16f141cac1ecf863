//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Command-line flags of the `url-shortener` binary override the values read here.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8888`)
//! - `BASE_URL` - Public prefix of short links (default: `http://localhost:<port>`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `LOG_ENABLED` - Set to `false` or `0` to silence logging (default: `true`)
//! - `ID_LENGTH` - Length of generated identifiers (default: 5, range: 1-12)

use anyhow::Result;
use std::env;

use crate::utils::id_generator::DEFAULT_ID_LENGTH;

const DEFAULT_LISTEN: &str = "0.0.0.0:8888";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Prefix used when composing `<base>/r/<id>` links.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    pub log_enabled: bool,
    pub id_length: usize,
    /// Raw `ID_LENGTH` value when it could not be parsed.
    pub invalid_id_length: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.to_string());
        let base_url = env::var("BASE_URL").unwrap_or_else(|_| default_base_url(&listen_addr));
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let log_enabled = env::var("LOG_ENABLED")
            .map(|v| !(v.eq_ignore_ascii_case("false") || v == "0"))
            .unwrap_or(true);

        let (id_length, invalid_id_length) = match env::var("ID_LENGTH") {
            Ok(raw) => match raw.trim().parse() {
                Ok(len) => (len, None),
                Err(_) => (DEFAULT_ID_LENGTH, Some(raw)),
            },
            Err(_) => (DEFAULT_ID_LENGTH, None),
        };

        Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            log_enabled,
            id_length,
            invalid_id_length,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an `http://` or `https://` URL
    /// - `log_format` is not `text` or `json`
    /// - `ID_LENGTH` is not a number, or `id_length` is outside 1-12
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if let Some(raw) = &self.invalid_id_length {
            anyhow::bail!("ID_LENGTH must be a number between 1 and 12, got '{}'", raw);
        }

        if self.id_length == 0 || self.id_length > 12 {
            anyhow::bail!(
                "ID_LENGTH must be between 1 and 12, got {}",
                self.id_length
            );
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Identifier length: {}", self.id_length);
    }
}

/// Derives `http://localhost:<port>` from a `host:port` bind address.
pub fn default_base_url(listen_addr: &str) -> String {
    let port = listen_addr.rsplit(':').next().unwrap_or("8888");
    format!("http://localhost:{}", port)
}
