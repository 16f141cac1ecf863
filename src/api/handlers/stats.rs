//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the destination and visit counter of a short link.
///
/// # Endpoint
///
/// `GET /api/stats/{id}`
///
/// Visits still queued for the background worker may not be counted yet.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.redirect_service.stats(&id).await?;
    Ok(Json(stats.into()))
}
