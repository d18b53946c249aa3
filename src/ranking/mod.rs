//! Weighted relevance ranking.
//!
//! A candidate's score is the weighted sum of its field scores
//! (names, brand, categories, labels, quantity; weights in [`FieldWeights`]).
//! It is a sum, not an average: with the default weights the maximum is 800,
//! so consumers must not assume a 0-100 range.

pub mod config;
pub mod ranker;
pub mod types;

#[cfg(test)]
mod tests;

pub use config::{FieldWeights, RankingConfig};
pub use ranker::RelevanceRanker;
pub use types::{MatchVerdict, ScoreBreakdown, ScoredCandidate};
