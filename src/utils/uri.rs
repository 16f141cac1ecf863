//! Destination URI validation.
//!
//! Destinations are checked, never rewritten: the stored string is exactly
//! what the client submitted.

use url::Url;

/// Errors returned for unusable destinations.
#[derive(Debug, thiserror::Error)]
pub enum UriValidationError {
    #[error("Destination must not be empty")]
    Empty,

    #[error("Destination must not start or end with whitespace")]
    SurroundingWhitespace,

    #[error("Destination must not contain control characters")]
    ControlCharacter,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),
}

/// Checks that `input` is a syntactically valid absolute URI.
///
/// A scheme is required, and schemes that need an authority (`http`, `https`,
/// `ftp`, ...) must carry a non-empty host. Control characters are rejected
/// because the destination is sent back verbatim in a `Location` header.
/// Leading or trailing whitespace is rejected as well: `Url::parse` strips it
/// silently, but the stored string would keep it.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_destination("https://example.com/a").is_ok());
/// assert!(validate_destination("mailto:someone@example.com").is_ok());
/// assert!(validate_destination("not a url").is_err());
/// assert!(validate_destination("/relative/path").is_err());
/// ```
pub fn validate_destination(input: &str) -> Result<(), UriValidationError> {
    if input.trim().is_empty() {
        return Err(UriValidationError::Empty);
    }

    if input != input.trim() {
        return Err(UriValidationError::SurroundingWhitespace);
    }

    if input.chars().any(char::is_control) {
        return Err(UriValidationError::ControlCharacter);
    }

    Url::parse(input)?;
    Ok(())
}
