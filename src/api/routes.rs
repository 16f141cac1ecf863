//! API route configuration.

use crate::api::handlers::{shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`      - Create or find the short link for a destination
/// - `GET  /stats/{id}`   - Destination and visit counter of a short link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{id}", get(stats_handler))
}
