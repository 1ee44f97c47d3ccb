//! Axum route handlers for the Analyze API.

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::analyze::pipeline::{run_analysis, AnalyzeResponse};
use crate::analyze::upload::collect_uploads;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/analyze
///
/// Multipart form with a `resume` PDF and an optional `job_description`
/// (PDF or plain text). Returns the extracted texts, match percentage, gap
/// tokens and static suggestions.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let uploads = collect_uploads(multipart).await?;

    let response = run_analysis(
        uploads,
        state.extractor.as_ref(),
        &state.advisor,
        state.config.gap_limit,
    )
    .await?;

    Ok(Json(response))
}
