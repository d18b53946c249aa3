//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `SHELFMATCH_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;

use crate::oracle::OracleConfig;
use crate::ranking::{FieldWeights, RankingConfig};
use crate::refine::RefinementConfig;

/// Matching configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SHELFMATCH_*` overrides on top of defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Field weights, category specificity and label policy.
    pub ranking: RankingConfig,

    /// Acceptance threshold and round budget.
    pub refinement: RefinementConfig,

    /// Oracle model names and deadline.
    pub oracle: OracleConfig,
}

impl Config {
    const ENV_MATCH_THRESHOLD: &'static str = "SHELFMATCH_MATCH_THRESHOLD";
    const ENV_MAX_ROUNDS: &'static str = "SHELFMATCH_MAX_ROUNDS";
    const ENV_WEIGHT_NAME: &'static str = "SHELFMATCH_WEIGHT_NAME";
    const ENV_WEIGHT_BRAND: &'static str = "SHELFMATCH_WEIGHT_BRAND";
    const ENV_WEIGHT_CATEGORY: &'static str = "SHELFMATCH_WEIGHT_CATEGORY";
    const ENV_WEIGHT_LABEL: &'static str = "SHELFMATCH_WEIGHT_LABEL";
    const ENV_WEIGHT_QUANTITY: &'static str = "SHELFMATCH_WEIGHT_QUANTITY";
    const ENV_SPECIFICITY_STEP: &'static str = "SHELFMATCH_SPECIFICITY_STEP";
    const ENV_PRIMARY_NAME_TAG: &'static str = "SHELFMATCH_PRIMARY_NAME_TAG";
    const ENV_TIER1_MODEL: &'static str = "SHELFMATCH_TIER1_MODEL";
    const ENV_TIER2_MODEL: &'static str = "SHELFMATCH_TIER2_MODEL";
    const ENV_ORACLE_TIMEOUT_SECS: &'static str = "SHELFMATCH_ORACLE_TIMEOUT_SECS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let default_weights = defaults.ranking.weights;
        let weights = FieldWeights {
            name: Self::parse_f64_from_env(Self::ENV_WEIGHT_NAME, default_weights.name)?,
            brand: Self::parse_f64_from_env(Self::ENV_WEIGHT_BRAND, default_weights.brand)?,
            category: Self::parse_f64_from_env(
                Self::ENV_WEIGHT_CATEGORY,
                default_weights.category,
            )?,
            label: Self::parse_f64_from_env(Self::ENV_WEIGHT_LABEL, default_weights.label)?,
            quantity: Self::parse_f64_from_env(
                Self::ENV_WEIGHT_QUANTITY,
                default_weights.quantity,
            )?,
        };
        let specificity_step = Self::parse_f64_from_env(
            Self::ENV_SPECIFICITY_STEP,
            defaults.ranking.specificity_step,
        )?;

        let mut label_policy = defaults.ranking.label_policy;
        label_policy.primary_name_tag =
            Self::parse_string_from_env(Self::ENV_PRIMARY_NAME_TAG, label_policy.primary_name_tag);

        let match_threshold = Self::parse_f64_from_env(
            Self::ENV_MATCH_THRESHOLD,
            defaults.refinement.match_threshold,
        )?;
        let max_rounds =
            Self::parse_usize_from_env(Self::ENV_MAX_ROUNDS, defaults.refinement.max_rounds)?;

        let tier1_model =
            Self::parse_string_from_env(Self::ENV_TIER1_MODEL, defaults.oracle.tier1_model);
        let tier2_model =
            Self::parse_string_from_env(Self::ENV_TIER2_MODEL, defaults.oracle.tier2_model);
        let timeout_secs = Self::parse_u64_from_env(
            Self::ENV_ORACLE_TIMEOUT_SECS,
            defaults.oracle.timeout_secs,
        )?;

        Ok(Self {
            ranking: RankingConfig {
                weights,
                specificity_step,
                label_policy,
            },
            refinement: RefinementConfig {
                match_threshold,
                max_rounds,
            },
            oracle: OracleConfig {
                tier1_model,
                tier2_model,
                timeout_secs,
            },
        })
    }

    /// Checks ranges and required values of every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ranking.validate()?;
        self.refinement.validate()?;
        self.oracle.validate()
    }

    fn parse_f64_from_env(name: &'static str, default: f64) -> Result<f64, ConfigError> {
        match Self::read_trimmed(name) {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidFloat { name, value, source }),
            None => Ok(default),
        }
    }

    fn parse_usize_from_env(name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match Self::read_trimmed(name) {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidInteger { name, value, source }),
            None => Ok(default),
        }
    }

    fn parse_u64_from_env(name: &'static str, default: u64) -> Result<u64, ConfigError> {
        match Self::read_trimmed(name) {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidInteger { name, value, source }),
            None => Ok(default),
        }
    }

    fn parse_string_from_env(name: &str, default: String) -> String {
        Self::read_trimmed(name).unwrap_or(default)
    }

    fn read_trimmed(name: &str) -> Option<String> {
        env::var(name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
