// Requirement-extraction and scoring engine.
// normalize/extractor/scorer/ranking are pure and synchronous; handlers is
// the thin HTTP plumbing around them.

pub mod catalog;
pub mod extractor;
pub mod handlers;
pub mod normalize;
pub mod ranking;
pub mod scorer;
