use crate::config::ConfigError;
use crate::constants::{DEFAULT_MATCH_THRESHOLD, DEFAULT_MAX_ROUNDS};

#[derive(Debug, Clone, PartialEq)]
pub struct RefinementConfig {
    /// Weighted score the top candidate must reach to be accepted. Default: 55.0.
    pub match_threshold: f64,

    /// Fetch+rank rounds per search. Default: 3.
    pub max_rounds: usize,
}

impl Default for RefinementConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl RefinementConfig {
    pub fn with_match_threshold(mut self, threshold: f64) -> Self {
        self.match_threshold = threshold;
        self
    }

    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = rounds;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.match_threshold.is_finite() || self.match_threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold {
                value: self.match_threshold,
            });
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        Ok(())
    }
}
