//! Shared fixtures for integration tests.

#![allow(dead_code)]

use shelfmatch::{Candidate, CandidateSource, SourceError};

pub fn nutella() -> Candidate {
    Candidate::new("3017620422003")
        .with_name("main", "Nutella")
        .with_name("pl", "Nutella krem do smarowania z orzechami")
        .with_brand("Ferrero")
        .with_categories([
            "Spreads",
            "Sweet Spreads",
            "Cocoa and hazelnuts spreads",
            "Hazelnut Spreads",
        ])
        .with_category_tags(["en:spreads", "en:sweet-spreads", "en:hazelnut-spreads"])
        .with_quantity("400 g")
        .with_base_score(8.0)
}

pub fn sausages() -> Candidate {
    Candidate::new("5900562435119")
        .with_name("main", "Parówki z szynki")
        .with_name("pl", "Parówki z kurczaka naturalne")
        .with_brand("Tarczyński")
        .with_categories(["Meats", "Prepared meats", "Sausages", "pl:parowki"])
        .with_labels(["Polish product", "Gluten-free"])
        .with_quantity("160 g")
        .with_base_score(5.5)
}

pub fn cola() -> Candidate {
    Candidate::new("5449000131805")
        .with_name("main", "Coca-Cola Zero")
        .with_brand("Coca-Cola")
        .with_categories(["Beverages", "Carbonated drinks", "Sodas"])
        .with_quantity("330 ml")
        .with_base_score(12.0)
}

pub fn catalog() -> Vec<Candidate> {
    vec![nutella(), sausages(), cola()]
}

/// Naive text index: a candidate matches when any query token of three or
/// more characters appears in its names or brand.
#[derive(Debug, Clone)]
pub struct KeywordIndex {
    products: Vec<Candidate>,
    offline: bool,
}

impl KeywordIndex {
    pub fn new(products: Vec<Candidate>) -> Self {
        Self {
            products,
            offline: false,
        }
    }

    pub fn offline() -> Self {
        Self {
            products: Vec::new(),
            offline: true,
        }
    }
}

impl CandidateSource for KeywordIndex {
    async fn fetch(&self, query: &str) -> Result<Vec<Candidate>, SourceError> {
        if self.offline {
            return Err(SourceError::Unavailable {
                reason: "index offline".to_string(),
            });
        }

        let tokens: Vec<&str> = query.split_whitespace().filter(|t| t.len() >= 3).collect();
        Ok(self
            .products
            .iter()
            .filter(|p| {
                let haystack = format!(
                    "{} {}",
                    p.unique_names().join(" ").to_lowercase(),
                    p.brand.to_lowercase()
                );
                tokens.iter().any(|t| haystack.contains(t))
            })
            .cloned()
            .collect())
    }
}
