//! Runs one search against a small in-memory catalog.
//!
//! ```text
//! cargo run --example refine_query --features mock -- "ParówKurNatTarcz160g"
//! ```
//!
//! With `OPENAI_API_KEY` set the chat-provider oracle is used for weak
//! queries; otherwise a scripted oracle answers `no_match_found`.
//! Set `RUST_LOG=shelfmatch=debug` to follow the rounds.

use shelfmatch::{
    Candidate, Config, GenaiOracle, MockCandidateSource, MockOracle, RefinementController,
    RefinementDecision, SearchOutcome,
};

fn catalog() -> Vec<Candidate> {
    vec![
        Candidate::new("3017620422003")
            .with_name("main", "Nutella")
            .with_brand("Ferrero")
            .with_categories(["Spreads", "Sweet Spreads", "Hazelnut Spreads"])
            .with_category_tags(["en:spreads", "en:hazelnut-spreads"])
            .with_quantity("400 g")
            .with_base_score(8.0),
        Candidate::new("5900562435119")
            .with_name("main", "Parówki z szynki")
            .with_name("pl", "Parówki z kurczaka naturalne")
            .with_brand("Tarczyński")
            .with_categories(["Meats", "Prepared meats", "Sausages"])
            .with_labels(["Polish product"])
            .with_quantity("160 g")
            .with_base_score(5.5),
        Candidate::new("5449000131805")
            .with_name("main", "Coca-Cola Zero")
            .with_brand("Coca-Cola")
            .with_categories(["Beverages", "Sodas"])
            .with_quantity("330 ml")
            .with_base_score(12.0),
    ]
}

fn report(outcome: &SearchOutcome) -> anyhow::Result<()> {
    println!("status:      {}", outcome.status());
    println!("final query: {}", outcome.final_query);
    println!("rounds:      {}", outcome.round_count());
    if let Some(best) = &outcome.best {
        println!(
            "best match:  {} [{}] score {:.1}",
            best.display_label,
            best.id(),
            best.score
        );
    }
    if let Some(decision) = &outcome.final_decision {
        println!("decision:    {decision}");
    }
    println!("\n{}", outcome.to_json()?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ParówKurNatTarcz160g".to_string());

    let config = Config::from_env()?;
    config.validate()?;

    let source = MockCandidateSource::new().with_default(catalog());

    let outcome = if std::env::var("OPENAI_API_KEY").is_ok() {
        tracing::info!(
            tier1 = %config.oracle.tier1_model,
            tier2 = %config.oracle.tier2_model,
            "Using chat-provider oracle"
        );
        let oracle = GenaiOracle::new(config.oracle.clone());
        RefinementController::from_config(&config, source, oracle)
            .run(&query)
            .await
    } else {
        let oracle = MockOracle::always(RefinementDecision::inconclusive("offline demo"));
        RefinementController::from_config(&config, source, oracle)
            .run(&query)
            .await
    };

    report(&outcome)
}
