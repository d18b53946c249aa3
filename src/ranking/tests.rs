use super::*;
use crate::catalog::{Candidate, LabelPolicy};

fn nutella() -> Candidate {
    Candidate::new("nutella")
        .with_name("main", "Nutella")
        .with_name("pl", "Nutella krem do smarowania")
        .with_brand("Ferrero")
        .with_categories(["Spreads", "Sweet Spreads", "Hazelnut Spreads"])
        .with_category_tags(["en:spreads", "en:hazelnut-spreads"])
        .with_quantity("400 g")
        .with_base_score(8.0)
}

fn cola() -> Candidate {
    Candidate::new("cola")
        .with_name("main", "Coca-Cola Zero")
        .with_brand("Coca-Cola")
        .with_categories(["Beverages", "Sodas"])
        .with_quantity("330 ml")
        .with_base_score(12.0)
}

fn milk() -> Candidate {
    Candidate::new("milk")
        .with_name("main", "Mleko UHT 2%")
        .with_brand("Mlekovita")
        .with_categories(["Dairies", "Milks"])
        .with_labels(["Polish product"])
        .with_quantity("1 l")
        .with_base_score(10.0)
}

fn twin(id: &str) -> Candidate {
    Candidate::new(id)
        .with_name("main", "Ser Gouda")
        .with_brand("Mlekpol")
        .with_quantity("150 g")
}

#[test]
fn test_default_weights() {
    let weights = FieldWeights::default();
    assert_eq!(weights.name, 3.0);
    assert_eq!(weights.brand, 2.0);
    assert_eq!(weights.category, 1.5);
    assert_eq!(weights.label, 1.0);
    assert_eq!(weights.quantity, 0.5);
    assert_eq!(weights.max_total(), 800.0);
}

#[test]
fn test_nutella_ranks_first_with_weighted_score_over_200() {
    let ranker = RelevanceRanker::new();
    let ranked = ranker.rank("nutella", vec![cola(), milk(), nutella()]);

    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].id(), "nutella");
    assert!(ranked[0].score > 200.0, "score: {}", ranked[0].score);
    assert_eq!(ranked[0].breakdown.names, 100.0);
    assert_eq!(ranked[0].base_score(), 8.0);
    assert_eq!(ranked[0].display_label, "Hazelnut Spreads");
}

#[test]
fn test_score_exceeds_100_for_strong_matches() {
    let ranker = RelevanceRanker::new();
    let score = ranker.score("nutella ferrero 400 g", &nutella());
    assert!(score > 100.0, "weighted score should not be capped: {score}");
}

#[test]
fn test_breakdown_total_matches_weights() {
    let ranker = RelevanceRanker::new();
    let b = ranker.explain("mleko 2%", &milk());
    let expected = 3.0 * b.names + 2.0 * b.brand + 1.5 * b.categories + b.labels + 0.5 * b.quantity;
    assert!((b.total - expected).abs() < 1e-9);
    assert!(b.names > 0.0);
}

#[test]
fn test_custom_weights_change_the_total() {
    let weights = FieldWeights {
        name: 1.0,
        brand: 0.0,
        category: 0.0,
        label: 0.0,
        quantity: 0.0,
    };
    let ranker = RelevanceRanker::with_config(RankingConfig::default().with_weights(weights));
    assert_eq!(ranker.score("nutella", &nutella()), 100.0);
}

#[test]
fn test_rank_sorted_descending() {
    let ranker = RelevanceRanker::new();
    let queries = ["nutella", "mleko", "cola zero 330 ml", "ser gouda"];
    for query in queries {
        let ranked = ranker.rank(query, vec![cola(), milk(), nutella(), twin("a")]);
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score, "{query}: not sorted");
        }
    }
}

#[test]
fn test_rank_stable_on_ties() {
    let ranker = RelevanceRanker::new();
    let ranked = ranker.rank(
        "gouda",
        vec![twin("first"), twin("second"), twin("third")],
    );

    let ids: Vec<&str> = ranked.iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
    assert_eq!(ranked[0].score, ranked[2].score);
}

#[test]
fn test_rank_empty_query_keeps_order_with_zero_scores() {
    let ranker = RelevanceRanker::new();
    let ranked = ranker.rank("", vec![milk(), nutella(), cola()]);

    let ids: Vec<&str> = ranked.iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec!["milk", "nutella", "cola"]);
    assert!(ranked.iter().all(|c| c.score == 0.0));
    assert_eq!(ranked[1].display_label, "Hazelnut Spreads");
}

#[test]
fn test_rank_empty_candidates() {
    let ranker = RelevanceRanker::new();
    assert!(ranker.rank("nutella", Vec::new()).is_empty());
}

#[test]
fn test_rank_uses_label_policy() {
    let policy = LabelPolicy::new("pl");
    let ranker = RelevanceRanker::with_config(RankingConfig::default().with_label_policy(policy));
    let candidate = Candidate::new("x")
        .with_name("main", "Nutella")
        .with_name("pl", "Krem orzechowy");

    let ranked = ranker.rank("nutella", vec![candidate]);
    assert_eq!(ranked[0].display_label, "Krem orzechowy");
}

#[test]
fn test_verify() {
    let ranker = RelevanceRanker::new();
    let ranked = ranker.rank("nutella", vec![nutella(), cola()]);

    assert!(ranker.verify(&ranked, 55.0).is_accepted());
    assert_eq!(
        ranker.verify(&ranked, 10_000.0),
        MatchVerdict::BelowThreshold {
            top_score: ranked[0].score
        }
    );
    assert_eq!(ranker.verify(&[], 55.0), MatchVerdict::NoCandidates);
}

#[test]
fn test_verified_score_never_exceeds_max_total() {
    let ranker = RelevanceRanker::new();
    let ranked = ranker.rank("nutella ferrero 400 g", vec![nutella(), cola(), milk()]);

    let verdict = ranker.verify(&ranked, 55.0);
    assert_eq!(verdict.debug_status(), "ACCEPTED");
    assert!(verdict.score().is_some_and(|s| s <= ranker.config().weights.max_total()));
}

#[test]
fn test_match_verdict_accessors() {
    assert_eq!(MatchVerdict::Accepted { score: 320.0 }.score(), Some(320.0));
    assert_eq!(
        MatchVerdict::BelowThreshold { top_score: 12.5 }.score(),
        Some(12.5)
    );
    assert_eq!(MatchVerdict::NoCandidates.score(), None);
    assert_eq!(MatchVerdict::NoCandidates.debug_status(), "NO_CANDIDATES");
    assert_eq!(
        format!("{}", MatchVerdict::Accepted { score: 320.0 }),
        "ACCEPTED (score: 320.0)"
    );
}

#[test]
fn test_ranking_config_validation() {
    assert!(RankingConfig::default().validate().is_ok());

    let negative = RankingConfig::default().with_weights(FieldWeights {
        brand: -1.0,
        ..FieldWeights::default()
    });
    assert!(negative.validate().is_err());

    let nan_step = RankingConfig::default().with_specificity_step(f64::NAN);
    assert!(nan_step.validate().is_err());

    let blank_tag = RankingConfig::default().with_label_policy(LabelPolicy::new(" "));
    assert!(blank_tag.validate().is_err());
}
