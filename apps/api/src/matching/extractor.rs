//! Requirement extraction — turns a raw job description into a structured
//! `RequirementSet` using the fixed skill catalog, an experience-years regex
//! and the education scale. Pure function, no I/O.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::matching::catalog::{canonical_education, EDUCATION_SCALE, SKILL_CATALOG};
use crate::matching::normalize::normalize;

/// "3 anos", "10+ anos", "5 ano". The second `\b` keeps "3anos" from
/// matching: digit and letter are both word characters, so there is no
/// boundary between them.
static EXPERIENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+)\s*\+?\s*\banos?\b").unwrap());

/// Structured output of parsing a job description.
/// Built once per request; immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementSet {
    /// Canonical skill tokens found in the description, sorted.
    pub skills: BTreeSet<String>,
    /// Required years of experience; 0 when not expressed.
    pub experience_years: u32,
    /// Canonical education label; "nenhum" when not expressed.
    pub education: String,
}

/// Extracts skills, experience years and education level from a raw job
/// description. Input is normalized first; all matching is substring-based
/// over the fixed vocabularies.
pub fn extract(raw_description: &str) -> RequirementSet {
    let text = normalize(raw_description);

    let skills = SKILL_CATALOG
        .iter()
        .filter(|skill| text.contains(*skill))
        .map(|skill| skill.to_string())
        .collect();

    RequirementSet {
        skills,
        experience_years: extract_experience(&text),
        education: extract_education(&text).to_string(),
    }
}

/// First match of the experience pattern wins; no match or an unparseable
/// capture falls back to 0, never an error.
fn extract_experience(text: &str) -> u32 {
    EXPERIENCE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0)
}

/// Among all scale labels occurring in the text, the HIGHEST rank wins —
/// not the first match and not the longest match. A description naming both
/// "ensino medio" and "pos-graduacao" therefore requires "pos-graduacao".
fn extract_education(text: &str) -> &'static str {
    let top_rank = EDUCATION_SCALE
        .iter()
        .filter(|(label, _)| text.contains(label))
        .map(|(_, rank)| *rank)
        .max()
        .unwrap_or(0);

    canonical_education(top_rank)
}
