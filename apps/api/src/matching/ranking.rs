//! Ranking aggregation — scores every profile and returns the full sequence
//! ordered by score. Top-N slicing belongs to the caller.

use serde::{Deserialize, Serialize};

use crate::matching::extractor::RequirementSet;
use crate::matching::scorer::score_profile;
use crate::models::profile::Profile;

/// One profile's computed compatibility, returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    pub name: String,
    pub url: String,
    pub score: u32,
    pub justification: String,
}

/// Scores each profile independently and sorts by score descending.
///
/// The sort is stable with no secondary key, so profiles with equal scores
/// keep their dataset order.
pub fn rank(profiles: &[Profile], requirements: &RequirementSet) -> Vec<ScoreResult> {
    let mut results: Vec<ScoreResult> = profiles
        .iter()
        .map(|profile| {
            let (score, justification) = score_profile(profile, requirements);
            ScoreResult {
                name: profile.name.clone(),
                url: profile.url.clone(),
                score,
                justification,
            }
        })
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}
