//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its destination.
///
/// # Endpoint
///
/// `GET /r/{id}`
///
/// # Visit Tracking
///
/// The visit is queued for the background worker after the entry is
/// resolved; the response does not wait for the counter update.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier doesn't exist.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let entry = state
        .redirect_service
        .resolve(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Short link not found", json!({ "id": id })))?;

    let location = HeaderValue::from_bytes(entry.destination.as_bytes()).map_err(|_| {
        AppError::internal(
            "Stored destination is not a valid header value",
            json!({ "id": entry.id }),
        )
    })?;

    state.redirect_service.record_visit(&entry.id);

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]))
}
