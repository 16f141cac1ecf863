//! Handler for link shortening endpoint.

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Creates (or finds) the short link for a destination URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// The raw destination URL, e.g. `https://example.com/some/long/path`.
/// It is stored exactly as sent.
///
/// # Response
///
/// Empty body with headers:
///
/// ```text
/// Location: http://localhost:8888/r/aB3-x
/// Link: <http://localhost:8888/api/stats/aB3-x>; rel="stats"
/// ```
///
/// - **201 Created**: a new short link was created
/// - **200 OK**: the destination was already shortened
///
/// # Errors
///
/// Returns 400 Bad Request if the destination is not a valid absolute URL.
/// Other HTTP methods receive 405 Method Not Allowed.
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let shortened = state.shortener_service.find_or_create(&body).await?;

    let id = &shortened.entry.id;
    let short_url = state.shortener_service.short_url(&state.base_url, id);
    let stats_url = state.shortener_service.stats_url(&state.base_url, id);

    let status = if shortened.is_new {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        [
            (header::LOCATION, short_url),
            (header::LINK, format!("<{}>; rel=\"stats\"", stats_url)),
        ],
    ))
}
