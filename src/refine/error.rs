use thiserror::Error;

/// Errors reported by a [`CandidateSource`](super::CandidateSource).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The backing store cannot be reached.
    #[error("candidate source unavailable: {reason}")]
    Unavailable { reason: String },

    /// The store was reached but the query failed.
    #[error("candidate query failed: {reason}")]
    QueryFailed { reason: String },
}
