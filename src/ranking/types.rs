use serde::Serialize;

use crate::catalog::Candidate;

/// Per-field scores of one candidate (each 0-100) and their weighted total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub names: f64,
    pub brand: f64,
    pub categories: f64,
    pub labels: f64,
    pub quantity: f64,
    /// Weighted sum. Not bounded by 100.
    pub total: f64,
}

/// Candidate annotated with its relevance score and display label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    /// Weighted relevance, `>= 0` and unbounded above.
    pub score: f64,
    /// Never absent; empty only when the candidate has no usable category or name.
    pub display_label: String,
    pub breakdown: ScoreBreakdown,
}

impl ScoredCandidate {
    pub fn new(candidate: Candidate, breakdown: ScoreBreakdown, display_label: String) -> Self {
        Self {
            candidate,
            score: breakdown.total,
            display_label,
            breakdown,
        }
    }

    pub fn id(&self) -> &str {
        &self.candidate.id
    }

    /// Score reported by the candidate source before re-ranking.
    pub fn base_score(&self) -> f64 {
        self.candidate.base_score
    }

    pub fn meets_threshold(&self, threshold: f64) -> bool {
        self.score >= threshold
    }
}

/// Outcome of checking a ranked list against the acceptance threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchVerdict {
    /// Top candidate reached the threshold.
    Accepted {
        score: f64,
    },
    /// Top candidate stayed below the threshold.
    BelowThreshold {
        top_score: f64,
    },
    NoCandidates,
}

impl MatchVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MatchVerdict::Accepted { .. })
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            MatchVerdict::Accepted { score } | MatchVerdict::BelowThreshold { top_score: score } => {
                Some(*score)
            }
            MatchVerdict::NoCandidates => None,
        }
    }

    pub fn debug_status(&self) -> &'static str {
        match self {
            MatchVerdict::Accepted { .. } => "ACCEPTED",
            MatchVerdict::BelowThreshold { .. } => "BELOW_THRESHOLD",
            MatchVerdict::NoCandidates => "NO_CANDIDATES",
        }
    }
}

impl std::fmt::Display for MatchVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchVerdict::Accepted { score } => write!(f, "ACCEPTED (score: {:.1})", score),
            MatchVerdict::BelowThreshold { top_score } => {
                write!(f, "BELOW_THRESHOLD (top_score: {:.1})", top_score)
            }
            MatchVerdict::NoCandidates => write!(f, "NO_CANDIDATES"),
        }
    }
}
