use serde::{Deserialize, Serialize};
use std::fmt;

/// What the oracle concluded about a weak query.
///
/// Serialized with the decision wire names used in oracle replies
/// (`valid_product`, `rephrased_successfully`, `not_a_product`, `no_match_found`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision")]
pub enum RefinementDecision {
    /// The query names a real product; the current results stand.
    #[serde(rename = "valid_product")]
    ValidMatch,

    /// A better query to search with.
    #[serde(rename = "rephrased_successfully")]
    Rephrased { query: String },

    /// The query is not a product at all.
    #[serde(rename = "not_a_product")]
    NotAProduct,

    /// No usable answer. Also produced for oracle and source failures.
    #[serde(rename = "no_match_found")]
    Inconclusive { diagnostic: String },
}

impl RefinementDecision {
    pub fn inconclusive(diagnostic: impl Into<String>) -> Self {
        Self::Inconclusive {
            diagnostic: diagnostic.into(),
        }
    }

    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::ValidMatch => "valid_product",
            Self::Rephrased { .. } => "rephrased_successfully",
            Self::NotAProduct => "not_a_product",
            Self::Inconclusive { .. } => "no_match_found",
        }
    }

    pub fn rephrased_query(&self) -> Option<&str> {
        match self {
            Self::Rephrased { query } => Some(query),
            _ => None,
        }
    }

    pub fn is_inconclusive(&self) -> bool {
        matches!(self, Self::Inconclusive { .. })
    }
}

impl fmt::Display for RefinementDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rephrased { query } => write!(f, "{} ('{}')", self.wire_name(), query),
            Self::Inconclusive { diagnostic } => {
                write!(f, "{} ({})", self.wire_name(), diagnostic)
            }
            _ => f.write_str(self.wire_name()),
        }
    }
}

/// Oracle escalation level. Tier 2 is the stronger, slower model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Tier1,
    Tier2,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Tier1 => "tier1",
            Tier::Tier2 => "tier2",
        }
    }

    /// Sampling temperature used for chat-provider calls.
    pub fn temperature(&self) -> f64 {
        match self {
            Tier::Tier1 => 0.3,
            Tier::Tier2 => 0.2,
        }
    }

    /// Completion token cap used for chat-provider calls.
    pub fn max_tokens(&self) -> u32 {
        match self {
            Tier::Tier1 => 500,
            Tier::Tier2 => 600,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the result summary shown to the oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortlistEntry {
    pub label: String,
    pub brand: String,
    pub categories: Vec<String>,
    pub score: f64,
}

/// Everything the oracle sees for one consultation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleRequest {
    pub tier: Tier,

    /// Canonical query of the current round.
    pub query: String,

    /// Display label of the best candidate, absent when the round found nothing.
    pub context: Option<String>,

    /// Tier-1 decision, set on tier-2 requests when tier 1 was consulted.
    pub prior: Option<RefinementDecision>,

    /// Top candidates of the round, best first.
    #[serde(default)]
    pub shortlist: Vec<ShortlistEntry>,
}

impl OracleRequest {
    pub fn new(tier: Tier, query: impl Into<String>) -> Self {
        Self {
            tier,
            query: query.into(),
            context: None,
            prior: None,
            shortlist: Vec::new(),
        }
    }

    pub fn with_context(mut self, context: Option<String>) -> Self {
        self.context = context;
        self
    }

    pub fn with_prior(mut self, prior: Option<RefinementDecision>) -> Self {
        self.prior = prior;
        self
    }

    pub fn with_shortlist(mut self, shortlist: Vec<ShortlistEntry>) -> Self {
        self.shortlist = shortlist;
        self
    }
}

/// An oracle answer. Only `decision` drives the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleVerdict {
    pub decision: RefinementDecision,
    /// Self-reported confidence in `[0, 1]`.
    pub confidence: f64,
    pub reasoning: String,
    pub model: String,
}

impl OracleVerdict {
    pub fn new(decision: RefinementDecision, model: impl Into<String>) -> Self {
        Self {
            decision,
            confidence: 0.0,
            reasoning: String::new(),
            model: model.into(),
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }
}
