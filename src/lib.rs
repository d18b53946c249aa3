//! Shelfmatch library crate: fuzzy product-query matching with oracle-driven refinement.
//!
//! # Public API Surface
//!
//! ## Pipeline
//! - [`normalize`], [`Query`] - Canonical query text
//! - [`score_field`] and the field scorers - 0-100 fuzzy similarity per field
//! - [`RelevanceRanker`], [`FieldWeights`], [`ScoredCandidate`] - Weighted ranking
//! - [`display_label`], [`LabelPolicy`] - Human-facing candidate labels
//! - [`RefinementController`], [`SearchOutcome`] - The bounded search loop
//!
//! ## Seams
//! - [`CandidateSource`] - Where candidates come from
//! - [`RephrasingOracle`], [`GenaiOracle`] - Who rephrases weak queries
//!
//! ## Catalog Loading
//! - [`resolve_ancestors`], [`ingest_taxonomy`] - Category records from full paths
//!
//! ## Configuration
//! - [`Config`], [`ConfigError`] - `SHELFMATCH_*` environment configuration
//!
//! ## Test/Mock Support
//! [`MockCandidateSource`] and [`MockOracle`] are available behind
//! `#[cfg(any(test, feature = "mock"))]`.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod normalize;
pub mod oracle;
pub mod ranking;
pub mod refine;
pub mod scoring;

pub use catalog::{
    Candidate, CategoryRecord, LabelPolicy, LocalizedName, SkippedCategory, TaxonomyError,
    TaxonomyReport, category_slug, display_label, ingest_taxonomy, resolve_ancestors,
};
pub use config::{Config, ConfigError};
pub use normalize::{Query, normalize, normalize_opt};
pub use oracle::{
    GenaiOracle, OracleConfig, OracleError, OracleRequest, OracleVerdict, RefinementDecision,
    RephrasingOracle, ShortlistEntry, Tier,
};
#[cfg(any(test, feature = "mock"))]
pub use oracle::{MockOracle, MockReply};
pub use ranking::{
    FieldWeights, MatchVerdict, RankingConfig, RelevanceRanker, ScoreBreakdown, ScoredCandidate,
};
pub use refine::{
    CandidateSource, Confidence, ControllerState, MatchStatus, OracleExchange,
    RefinementConfig, RefinementController, RoundSummary, SearchOutcome, Session, SourceError,
};
#[cfg(any(test, feature = "mock"))]
pub use refine::MockCandidateSource;
pub use scoring::{
    clean_category_tag, score_brand, score_categories, score_field, score_labels, score_names,
    score_quantity,
};
