use crate::catalog::LabelPolicy;
use crate::config::ConfigError;
use crate::constants::{
    DEFAULT_BRAND_WEIGHT, DEFAULT_CATEGORY_WEIGHT, DEFAULT_LABEL_WEIGHT, DEFAULT_NAME_WEIGHT,
    DEFAULT_QUANTITY_WEIGHT, DEFAULT_SPECIFICITY_STEP,
};

/// Multipliers applied to each field score before summing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldWeights {
    pub name: f64,
    pub brand: f64,
    pub category: f64,
    pub label: f64,
    pub quantity: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME_WEIGHT,
            brand: DEFAULT_BRAND_WEIGHT,
            category: DEFAULT_CATEGORY_WEIGHT,
            label: DEFAULT_LABEL_WEIGHT,
            quantity: DEFAULT_QUANTITY_WEIGHT,
        }
    }
}

impl FieldWeights {
    /// Largest total a candidate can reach (every field at 100).
    pub fn max_total(&self) -> f64 {
        100.0 * (self.name + self.brand + self.category + self.label + self.quantity)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("name", self.name),
            ("brand", self.brand),
            ("category", self.category),
            ("label", self.label),
            ("quantity", self.quantity),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { field, value });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankingConfig {
    pub weights: FieldWeights,

    /// Category position boost: position `i` is weighted `1.0 + step * i`. Default: `0.1`.
    pub specificity_step: f64,

    pub label_policy: LabelPolicy,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            weights: FieldWeights::default(),
            specificity_step: DEFAULT_SPECIFICITY_STEP,
            label_policy: LabelPolicy::default(),
        }
    }
}

impl RankingConfig {
    pub fn with_weights(mut self, weights: FieldWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_specificity_step(mut self, step: f64) -> Self {
        self.specificity_step = step;
        self
    }

    pub fn with_label_policy(mut self, policy: LabelPolicy) -> Self {
        self.label_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;

        if !self.specificity_step.is_finite() || self.specificity_step < 0.0 {
            return Err(ConfigError::InvalidSpecificityStep {
                value: self.specificity_step,
            });
        }

        if self.label_policy.primary_name_tag.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: "primary_name_tag",
            });
        }

        Ok(())
    }
}
