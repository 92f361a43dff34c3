//! Candidate profile record as it appears in the JSON dataset.

use serde::{Deserialize, Serialize};

/// One candidate profile. Read-only input; fields the dataset omits default
/// to empty/zero rather than failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub url: String,
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub education_level: String,
}
