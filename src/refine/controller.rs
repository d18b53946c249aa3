use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use super::config::RefinementConfig;
use super::session::Session;
use super::source::CandidateSource;
use super::types::{ControllerState, OracleExchange, SearchOutcome};
use crate::config::Config;
use crate::constants::DEFAULT_ORACLE_TIMEOUT_SECS;
use crate::normalize::Query;
use crate::oracle::prompt::SHORTLIST_LIMIT;
use crate::oracle::{
    OracleConfig, OracleError, OracleRequest, RefinementDecision, RephrasingOracle, ShortlistEntry, Tier,
};
use crate::ranking::{RelevanceRanker, ScoredCandidate};

/// Drives one search from a raw query to a [`SearchOutcome`].
///
/// Each round fetches candidates for the current canonical query and ranks
/// them. A top score at or above the threshold ends the search. Otherwise tier 1
/// is consulted about the round, and an inconclusive tier-1 answer escalates to
/// tier 2 on the same results. A round without candidates consults tier 1 only
/// if it has not been asked yet. A rephrased query starts a new round while the
/// round budget lasts; any other verdict ends the search. Failures of the
/// candidate source or the oracle never escape: they end up as `Inconclusive`
/// decisions in the outcome.
pub struct RefinementController<S, O> {
    source: S,
    oracle: O,
    ranker: RelevanceRanker,
    config: RefinementConfig,
    oracle_config: OracleConfig,
    oracle_timeout: Duration,
}

impl<S, O> RefinementController<S, O>
where
    S: CandidateSource,
    O: RephrasingOracle,
{
    pub fn new(source: S, oracle: O) -> Self {
        Self {
            source,
            oracle,
            ranker: RelevanceRanker::new(),
            config: RefinementConfig::default(),
            oracle_config: OracleConfig::default(),
            oracle_timeout: Duration::from_secs(DEFAULT_ORACLE_TIMEOUT_SECS),
        }
    }

    /// Controller with ranking, refinement and oracle settings from `config`.
    pub fn from_config(config: &Config, source: S, oracle: O) -> Self {
        Self::new(source, oracle)
            .with_ranker(RelevanceRanker::with_config(config.ranking.clone()))
            .with_config(config.refinement.clone())
            .with_oracle_config(config.oracle.clone())
    }

    pub fn with_ranker(mut self, ranker: RelevanceRanker) -> Self {
        self.ranker = ranker;
        self
    }

    pub fn with_config(mut self, config: RefinementConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the model names reported on failed calls and the call deadline.
    pub fn with_oracle_config(mut self, config: OracleConfig) -> Self {
        self.oracle_timeout = config.timeout();
        self.oracle_config = config;
        self
    }

    /// Overrides the per-call deadline, including sub-second values.
    pub fn with_oracle_timeout(mut self, timeout: Duration) -> Self {
        self.oracle_timeout = timeout;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn config(&self) -> &RefinementConfig {
        &self.config
    }

    #[instrument(skip_all, fields(query_len = raw_query.len()))]
    pub async fn run(&self, raw_query: &str) -> SearchOutcome {
        let threshold = self.config.match_threshold;
        let max_rounds = self.config.max_rounds.max(1);
        let mut session = Session::new(raw_query);
        let mut state = ControllerState::Initial;

        debug!(session_id = %session.id(), query = %session.query(), "Search started");

        while state != ControllerState::Done {
            state = match state {
                ControllerState::Initial => {
                    if session.round_count() >= max_rounds {
                        debug!(max_rounds, "Round budget exhausted");
                        ControllerState::Done
                    } else {
                        self.fetch_round(&mut session, threshold).await
                    }
                }
                ControllerState::AwaitTier1 => {
                    match self.consult(&mut session, Tier::Tier1).await {
                        RefinementDecision::Rephrased { query } => {
                            session.replace_query(Query::new(query));
                            ControllerState::Initial
                        }
                        RefinementDecision::Inconclusive { .. } => ControllerState::AwaitTier2,
                        decision => {
                            session.conclude(decision);
                            ControllerState::Done
                        }
                    }
                }
                ControllerState::AwaitTier2 => {
                    match self.consult(&mut session, Tier::Tier2).await {
                        RefinementDecision::Rephrased { query } => {
                            session.replace_query(Query::new(query));
                            ControllerState::Initial
                        }
                        decision => {
                            session.conclude(decision);
                            ControllerState::Done
                        }
                    }
                }
                ControllerState::Done => ControllerState::Done,
            };
        }

        let outcome = session.into_outcome(threshold);
        info!(
            session_id = %outcome.session_id,
            rounds = outcome.round_count(),
            oracle_calls = outcome.oracle_calls(),
            best_score = outcome.best_score(),
            status = %outcome.status,
            "Search finished"
        );
        outcome
    }

    /// One fetch+rank round; returns the state that follows it.
    async fn fetch_round(&self, session: &mut Session, threshold: f64) -> ControllerState {
        let query = session.query().canonical().to_string();

        let candidates = match self.source.fetch(&query).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(error = %e, round = session.round_count() + 1, "Candidate source failed");
                session.conclude(RefinementDecision::inconclusive(e.to_string()));
                return ControllerState::Done;
            }
        };

        let ranked = self.ranker.rank(&query, candidates);
        let verdict = self.ranker.verify(&ranked, threshold);
        let found_any = !ranked.is_empty();
        session.record_round(ranked);

        debug!(
            round = session.round_count(),
            threshold,
            verdict = %verdict,
            "Round ranked"
        );

        if verdict.is_accepted() {
            ControllerState::Done
        } else {
            self.next_tier(session, found_any)
        }
    }

    fn next_tier(&self, session: &Session, found_any: bool) -> ControllerState {
        if session.round_count() >= self.config.max_rounds.max(1) {
            debug!(rounds = session.round_count(), "No round left for a rephrase");
            ControllerState::Done
        } else if found_any || !session.tier_used(Tier::Tier1) {
            ControllerState::AwaitTier1
        } else {
            ControllerState::Done
        }
    }

    /// Asks `tier` about the latest round and records the exchange.
    ///
    /// Errors, timeouts and rephrases that normalize to nothing come back as
    /// `Inconclusive`. A returned `Rephrased` query is already canonical.
    async fn consult(&self, session: &mut Session, tier: Tier) -> RefinementDecision {
        let request = build_request(session, tier);
        let model = self.oracle_config.model_for(tier).to_string();
        let asked_at = Utc::now();
        let started = Instant::now();

        let result = tokio::time::timeout(self.oracle_timeout, self.oracle.ask(&request))
            .await
            .unwrap_or_else(|_| {
                Err(OracleError::Timeout {
                    model: model.clone(),
                    millis: self.oracle_timeout.as_millis(),
                })
            });

        let exchange = match result {
            Ok(verdict) => OracleExchange {
                tier,
                model: verdict.model,
                query: request.query,
                context: request.context,
                decision: canonical_decision(verdict.decision),
                confidence: verdict.confidence,
                reasoning: verdict.reasoning,
                error: None,
                asked_at,
                elapsed_ms: elapsed_ms(started),
            },
            Err(e) => {
                warn!(tier = %tier, error = %e, "Oracle call failed");
                OracleExchange {
                    tier,
                    model,
                    query: request.query,
                    context: request.context,
                    decision: RefinementDecision::inconclusive(e.to_string()),
                    confidence: 0.0,
                    reasoning: String::new(),
                    error: Some(e.to_string()),
                    asked_at,
                    elapsed_ms: elapsed_ms(started),
                }
            }
        };

        debug!(
            tier = %tier,
            decision = exchange.decision.wire_name(),
            elapsed_ms = exchange.elapsed_ms,
            "Oracle consulted"
        );

        let decision = exchange.decision.clone();
        session.record_exchange(exchange);
        decision
    }
}

fn build_request(session: &Session, tier: Tier) -> OracleRequest {
    let results = session.results();
    let prior = match tier {
        Tier::Tier1 => None,
        Tier::Tier2 => session.decision(Tier::Tier1).cloned(),
    };

    OracleRequest::new(tier, session.query().canonical())
        .with_context(results.first().map(|top| top.display_label.clone()))
        .with_prior(prior)
        .with_shortlist(shortlist(results))
}

fn shortlist(results: &[ScoredCandidate]) -> Vec<ShortlistEntry> {
    results
        .iter()
        .take(SHORTLIST_LIMIT)
        .map(|c| ShortlistEntry {
            label: c.display_label.clone(),
            brand: c.candidate.brand.clone(),
            categories: c.candidate.categories.clone(),
            score: c.score,
        })
        .collect()
}

/// Normalizes a rephrased query; a rephrase with nothing left is inconclusive.
fn canonical_decision(decision: RefinementDecision) -> RefinementDecision {
    match decision {
        RefinementDecision::Rephrased { query } => {
            let query = Query::new(query);
            if query.is_empty() {
                RefinementDecision::inconclusive("rephrased query is empty after normalization")
            } else {
                RefinementDecision::Rephrased {
                    query: query.canonical().to_string(),
                }
            }
        }
        other => other,
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
