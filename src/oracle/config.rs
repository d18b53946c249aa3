use std::time::Duration;

use super::types::Tier;
use crate::config::ConfigError;
use crate::constants::{DEFAULT_ORACLE_TIMEOUT_SECS, DEFAULT_TIER1_MODEL, DEFAULT_TIER2_MODEL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleConfig {
    /// Model consulted first. Default: `gpt-3.5-turbo`.
    pub tier1_model: String,

    /// Model consulted on escalation. Default: `gpt-4`.
    pub tier2_model: String,

    /// Per-call deadline in seconds. Default: 30.
    pub timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            tier1_model: DEFAULT_TIER1_MODEL.to_string(),
            tier2_model: DEFAULT_TIER2_MODEL.to_string(),
            timeout_secs: DEFAULT_ORACLE_TIMEOUT_SECS,
        }
    }
}

impl OracleConfig {
    pub fn with_tier1_model(mut self, model: impl Into<String>) -> Self {
        self.tier1_model = model.into();
        self
    }

    pub fn with_tier2_model(mut self, model: impl Into<String>) -> Self {
        self.tier2_model = model.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn model_for(&self, tier: Tier) -> &str {
        match tier {
            Tier::Tier1 => &self.tier1_model,
            Tier::Tier2 => &self.tier2_model,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tier1_model.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: "tier1_model",
            });
        }
        if self.tier2_model.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: "tier2_model",
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}
