use std::cmp::Ordering;
use tracing::debug;

use crate::catalog::Candidate;
use crate::scoring::{score_brand, score_categories, score_labels, score_names, score_quantity};

use super::config::RankingConfig;
use super::types::{MatchVerdict, ScoreBreakdown, ScoredCandidate};

/// Re-scores candidates against a normalized query with the weighted field formula.
#[derive(Debug, Clone, Default)]
pub struct RelevanceRanker {
    config: RankingConfig,
}

impl RelevanceRanker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RankingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Field-by-field scores for one candidate.
    pub fn explain(&self, query: &str, candidate: &Candidate) -> ScoreBreakdown {
        if query.trim().is_empty() {
            return ScoreBreakdown::default();
        }

        let weights = &self.config.weights;
        let names = score_names(query, &candidate.unique_names());
        let brand = score_brand(query, &candidate.brand);
        let categories = score_categories(
            query,
            &candidate.categories,
            &candidate.category_tags,
            self.config.specificity_step,
        );
        let labels = score_labels(query, &candidate.labels);
        let quantity = score_quantity(query, &candidate.quantity);

        let total = weights.name * names
            + weights.brand * brand
            + weights.category * categories
            + weights.label * labels
            + weights.quantity * quantity;

        ScoreBreakdown {
            names,
            brand,
            categories,
            labels,
            quantity,
            total,
        }
    }

    pub fn score(&self, query: &str, candidate: &Candidate) -> f64 {
        self.explain(query, candidate).total
    }

    /// Scores and labels every candidate, sorted by descending score.
    ///
    /// The sort is stable, so ties keep their input order. With an empty query
    /// every score is 0 and the input order is returned unchanged.
    pub fn rank(&self, query: &str, candidates: Vec<Candidate>) -> Vec<ScoredCandidate> {
        debug!(
            query_len = query.len(),
            num_candidates = candidates.len(),
            "Ranking candidates"
        );

        let mut scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .map(|candidate| {
                let breakdown = self.explain(query, &candidate);
                let label = self.config.label_policy.display_label(&candidate);
                ScoredCandidate::new(candidate, breakdown, label)
            })
            .collect();

        if query.trim().is_empty() {
            return scored;
        }

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        debug!(
            top_score = scored.first().map(|c| c.score),
            "Ranking complete"
        );

        scored
    }

    /// Checks the top of an already-ranked list against `threshold`.
    pub fn verify(&self, ranked: &[ScoredCandidate], threshold: f64) -> MatchVerdict {
        let verdict = match ranked.first() {
            None => MatchVerdict::NoCandidates,
            Some(top) if top.meets_threshold(threshold) => {
                MatchVerdict::Accepted { score: top.score }
            }
            Some(top) => MatchVerdict::BelowThreshold {
                top_score: top.score,
            },
        };

        debug!(
            status = verdict.debug_status(),
            top_score = verdict.score(),
            threshold,
            max_total = self.config.weights.max_total(),
            "Verified top candidate"
        );

        verdict
    }
}
