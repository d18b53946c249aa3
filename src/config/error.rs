//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric environment variable could not be parsed as a float.
    #[error("failed to parse {name}='{value}': {source}")]
    InvalidFloat {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// An integer environment variable could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    InvalidInteger {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A field weight is negative or not finite.
    #[error("invalid {field} weight {value}: must be a finite number >= 0")]
    InvalidWeight { field: &'static str, value: f64 },

    /// The category specificity step is negative or not finite.
    #[error("invalid specificity step {value}: must be a finite number >= 0")]
    InvalidSpecificityStep { value: f64 },

    /// The acceptance threshold is negative or not finite.
    #[error("invalid match threshold {value}: must be a finite number >= 0")]
    InvalidThreshold { value: f64 },

    /// A search must be allowed at least one round.
    #[error("max_rounds must be at least 1")]
    ZeroRounds,

    /// Oracle calls need a non-zero deadline.
    #[error("oracle timeout must be at least 1 second")]
    ZeroTimeout,

    /// A required string setting is blank.
    #[error("{name} must not be empty")]
    EmptyValue { name: &'static str },
}
