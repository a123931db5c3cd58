//! Summary-statistics endpoint.

use axum::{Json, Router, extract::State, routing::get};

use super::{ApiError, AppState};
use crate::core::stats::{self, StatsSummary};

/// Routes for the statistics endpoint, mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new().route("/stats/summary", get(summary_handler))
}

async fn summary_handler(State(state): State<AppState>) -> Result<Json<StatsSummary>, ApiError> {
    let summary = stats::summarize(&state.conn).await?;
    Ok(Json(summary))
}
