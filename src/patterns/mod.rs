//! Pattern matching of observed arc line quads against reference lists.
//!
//! `quad_match` and `score` are pure: they never log and never touch
//! caller-owned state. `search` is the caller that strings them together
//! over a full set of observed centroids.

pub mod accumulator;
pub mod quad_match;
pub mod score;
pub mod search;

pub use accumulator::{FeatureRecord, MatchAccumulator};
pub use quad_match::{QuadParams, match_quad_to_list};
pub use score::{score_matches, score_quad_matches};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatternError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
