use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::types::{MatchStatus, OracleExchange, RoundSummary, SearchOutcome};
use crate::normalize::Query;
use crate::oracle::{RefinementDecision, Tier};
use crate::ranking::ScoredCandidate;

/// Per-search state owned by the controller. Never shared, never persisted.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    original: Query,
    query: Query,
    rounds: Vec<RoundSummary>,
    results: Vec<ScoredCandidate>,
    best: Option<ScoredCandidate>,
    tier1: Option<RefinementDecision>,
    tier2: Option<RefinementDecision>,
    final_decision: Option<RefinementDecision>,
    transcript: Vec<OracleExchange>,
}

impl Session {
    pub fn new(raw_query: &str) -> Self {
        let original = Query::new(raw_query);
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            query: original.clone(),
            original,
            rounds: Vec::new(),
            results: Vec::new(),
            best: None,
            tier1: None,
            tier2: None,
            final_decision: None,
            transcript: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Ranked candidates of the latest round.
    pub fn results(&self) -> &[ScoredCandidate] {
        &self.results
    }

    pub fn tier_used(&self, tier: Tier) -> bool {
        match tier {
            Tier::Tier1 => self.tier1.is_some(),
            Tier::Tier2 => self.tier2.is_some(),
        }
    }

    pub fn decision(&self, tier: Tier) -> Option<&RefinementDecision> {
        match tier {
            Tier::Tier1 => self.tier1.as_ref(),
            Tier::Tier2 => self.tier2.as_ref(),
        }
    }

    pub fn replace_query(&mut self, query: Query) {
        self.query = query;
    }

    /// Stores a round's ranking; the best candidate only moves on a strictly higher score.
    pub fn record_round(&mut self, ranked: Vec<ScoredCandidate>) {
        let top_score = ranked.first().map(|c| c.score);
        self.rounds.push(RoundSummary {
            round: self.rounds.len() + 1,
            query: self.query.canonical().to_string(),
            candidates: ranked.len(),
            top_score,
        });

        if let Some(top) = ranked.first() {
            let improves = self.best.as_ref().is_none_or(|best| top.score > best.score);
            if improves {
                self.best = Some(top.clone());
            }
        }
        self.results = ranked;
    }

    pub fn record_exchange(&mut self, exchange: OracleExchange) {
        let decision = exchange.decision.clone();
        match exchange.tier {
            Tier::Tier1 => self.tier1 = Some(decision),
            Tier::Tier2 => self.tier2 = Some(decision),
        }
        self.transcript.push(exchange);
    }

    pub fn conclude(&mut self, decision: RefinementDecision) {
        self.final_decision = Some(decision);
    }

    pub fn into_outcome(self, threshold: f64) -> SearchOutcome {
        let status = MatchStatus::from_best(self.best.as_ref().map(|c| c.score), threshold);
        SearchOutcome {
            session_id: self.id,
            started_at: self.started_at,
            original_query: self.original.raw().to_string(),
            final_query: self.query.canonical().to_string(),
            threshold,
            status,
            results: self.results,
            best: self.best,
            rounds: self.rounds,
            tier1: self.tier1,
            tier2: self.tier2,
            final_decision: self.final_decision,
            transcript: self.transcript,
        }
    }
}
