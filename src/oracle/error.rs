use thiserror::Error;

/// Errors that can occur while consulting a rephrasing oracle.
#[derive(Debug, Error)]
pub enum OracleError {
    /// No oracle is available for this tier.
    #[error("oracle not configured")]
    NotConfigured,

    /// The chat provider rejected or failed the request.
    #[error("provider error ({model}): {reason}")]
    Provider { model: String, reason: String },

    /// The provider answered without any text.
    #[error("empty response from {model}")]
    EmptyResponse { model: String },

    /// The call did not finish before the deadline.
    #[error("{model} timed out after {millis}ms")]
    Timeout { model: String, millis: u128 },
}

pub type OracleResult<T> = Result<T, OracleError>;
