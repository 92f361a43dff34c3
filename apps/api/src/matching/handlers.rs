//! Axum route handlers for the Matching API. Thin plumbing: validate input,
//! load the dataset, hand everything to the pure engine, slice the top-N.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::extractor::{extract, RequirementSet};
use crate::matching::ranking::{rank, ScoreResult};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub description: String,
    /// Overrides the configured default when present.
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub requirements: RequirementSet,
    pub results: Vec<ScoreResult>,
    /// Size of the dataset before slicing, for transparency.
    pub total_candidates: usize,
}

#[derive(Debug, Deserialize)]
pub struct RequirementsRequest {
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct RequirementsResponse {
    pub requirements: RequirementSet,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Extracts requirements from the description, ranks every profile in the
/// dataset against them and returns the top-N with the parsed requirements.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    if request.description.trim().is_empty() {
        return Err(AppError::Validation(
            "description cannot be empty".to_string(),
        ));
    }

    let requirements = extract(&request.description);
    let profiles = state.profiles.load().await?;
    let total_candidates = profiles.len();

    let top_n = request.top_n.unwrap_or(state.config.default_top_n);
    let mut results = rank(&profiles, &requirements);
    results.truncate(top_n);

    tracing::info!(
        total_candidates,
        returned = results.len(),
        "ranked candidates for match request"
    );

    Ok(Json(MatchResponse {
        requirements,
        results,
        total_candidates,
    }))
}

/// POST /api/v1/match/requirements
///
/// Returns only the extracted requirements. Useful for previewing what the
/// engine read out of a description before ranking.
pub async fn handle_requirements(
    Json(request): Json<RequirementsRequest>,
) -> Result<Json<RequirementsResponse>, AppError> {
    if request.description.trim().is_empty() {
        return Err(AppError::Validation(
            "description cannot be empty".to_string(),
        ));
    }

    Ok(Json(RequirementsResponse {
        requirements: extract(&request.description),
    }))
}
