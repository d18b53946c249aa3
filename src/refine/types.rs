use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::oracle::{RefinementDecision, Tier};
use crate::ranking::ScoredCandidate;

/// Controller position in the escalation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControllerState {
    /// About to fetch and rank with the current query.
    Initial,
    AwaitTier1,
    AwaitTier2,
    Done,
}

/// Overall result of a search, judged on the best candidate found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Best candidate reached the threshold.
    Successful,
    /// Candidates were found, none reached the threshold.
    LowConfidence,
    /// No candidates at all.
    NoMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Low,
    None,
}

impl MatchStatus {
    pub fn from_best(best_score: Option<f64>, threshold: f64) -> Self {
        match best_score {
            Some(score) if score >= threshold => MatchStatus::Successful,
            Some(_) => MatchStatus::LowConfidence,
            None => MatchStatus::NoMatch,
        }
    }

    pub fn confidence(&self) -> Confidence {
        match self {
            MatchStatus::Successful => Confidence::High,
            MatchStatus::LowConfidence => Confidence::Low,
            MatchStatus::NoMatch => Confidence::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Successful => "successful",
            MatchStatus::LowConfidence => "low_confidence",
            MatchStatus::NoMatch => "no_match",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fetch+rank round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSummary {
    /// 1-based.
    pub round: usize,
    pub query: String,
    pub candidates: usize,
    pub top_score: Option<f64>,
}

/// One oracle consultation as recorded in the session transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OracleExchange {
    pub tier: Tier,
    /// Model reported by the oracle; the tier name when the call failed.
    pub model: String,
    pub query: String,
    pub context: Option<String>,
    pub decision: RefinementDecision,
    pub confidence: f64,
    pub reasoning: String,
    pub error: Option<String>,
    pub asked_at: DateTime<Utc>,
    pub elapsed_ms: u64,
}

/// Everything a finished search produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub original_query: String,
    /// Canonical query of the last round.
    pub final_query: String,
    pub threshold: f64,
    pub status: MatchStatus,
    /// Ranked candidates of the last round.
    pub results: Vec<ScoredCandidate>,
    /// Highest-scoring candidate across all rounds.
    pub best: Option<ScoredCandidate>,
    pub rounds: Vec<RoundSummary>,
    pub tier1: Option<RefinementDecision>,
    pub tier2: Option<RefinementDecision>,
    /// The decision that ended the session, when one did.
    pub final_decision: Option<RefinementDecision>,
    pub transcript: Vec<OracleExchange>,
}

impl SearchOutcome {
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn confidence(&self) -> Confidence {
        self.status.confidence()
    }

    pub fn is_successful(&self) -> bool {
        self.status == MatchStatus::Successful
    }

    pub fn best_score(&self) -> Option<f64> {
        self.best.as_ref().map(|c| c.score)
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn oracle_calls(&self) -> usize {
        self.transcript.len()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
