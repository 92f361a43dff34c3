//! Process-wide constant vocabularies: the skill catalog and the education
//! scale. Both are immutable statics, never mutated after start, so concurrent
//! requests share them without coordination.
//!
//! All entries are stored pre-normalized (lowercase, accents folded) so they
//! can be matched directly against `normalize`d text.

/// Fixed ordered set of recognized skill tokens.
///
/// Membership is substring containment on normalized text, not token-boundary
/// matching, so "sql" also matches inside "postgresql". That imprecision is a
/// known trade-off of keyword extraction over free text and is kept as-is.
pub const SKILL_CATALOG: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "c#",
    "php",
    "ruby",
    "go",
    "rust",
    "html",
    "css",
    "react",
    "angular",
    "vue",
    "node",
    "sql",
    "nosql",
    "mongodb",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "git",
    "scrum",
    "full stack",
    "front end",
    "back end",
];

/// Education labels mapped to attainment ranks 0..=6.
///
/// Locale-variant spellings share a rank; the first entry of each rank is the
/// canonical label. "graduacao" is textually contained in "pos-graduacao" —
/// harmless, because extraction takes the highest matching rank.
pub const EDUCATION_SCALE: &[(&str, u8)] = &[
    ("nenhum", 0),
    ("ensino medio", 1),
    ("segundo grau", 1),
    ("tecnico", 2),
    ("superior completo", 3),
    ("ensino superior", 3),
    ("graduacao", 3),
    ("pos-graduacao", 4),
    ("pos graduacao", 4),
    ("especializacao", 4),
    ("mestrado", 5),
    ("doutorado", 6),
];

/// Rank of a normalized education label. Unknown labels rank 0.
pub fn education_rank(label: &str) -> u8 {
    EDUCATION_SCALE
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, rank)| *rank)
        .unwrap_or(0)
}

/// Canonical label for a rank (the first scale entry carrying it).
pub fn canonical_education(rank: u8) -> &'static str {
    EDUCATION_SCALE
        .iter()
        .find(|(_, r)| *r == rank)
        .map(|(name, _)| *name)
        .unwrap_or("nenhum")
}
