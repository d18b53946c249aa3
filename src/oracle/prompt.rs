//! Chat prompts for the two oracle tiers.

use std::fmt::Write;

use super::types::{OracleRequest, RefinementDecision, Tier};

/// Result rows included in the prompt context.
pub const SHORTLIST_LIMIT: usize = 5;

const TIER1_SYSTEM: &str = "You are a food product search assistant that helps analyze and improve product search queries.";

const TIER2_SYSTEM: &str = "You are an advanced food product search assistant with deep knowledge of food products, brands, and multilingual product names.";

const REPLY_FORMAT: &str = r#"{
    "decision": "valid_product|rephrased_successfully|not_a_product|no_match_found",
    "rephrased_query": "improved search query if applicable",
    "confidence": 0.0-1.0,
    "reasoning": "explanation of your analysis"
}"#;

pub fn system_prompt(tier: Tier) -> &'static str {
    match tier {
        Tier::Tier1 => TIER1_SYSTEM,
        Tier::Tier2 => TIER2_SYSTEM,
    }
}

/// Summary of the current results, or a note that there are none.
pub fn render_context(request: &OracleRequest) -> String {
    if request.shortlist.is_empty() {
        return match &request.context {
            Some(label) if !label.trim().is_empty() => format!("Best current match: {label}"),
            _ => "No existing search results found.".to_string(),
        };
    }

    let mut out = String::from("Current search results:");
    for (i, entry) in request.shortlist.iter().take(SHORTLIST_LIMIT).enumerate() {
        let _ = write!(
            out,
            "\n{}. Product: {}, Categories: {}, Brands: {}, Score: {:.1}",
            i + 1,
            entry.label,
            entry.categories.join(", "),
            entry.brand,
            entry.score
        );
    }
    out
}

fn render_prior(prior: Option<&RefinementDecision>) -> String {
    match prior {
        None => "none".to_string(),
        Some(RefinementDecision::Rephrased { query }) => {
            format!("rephrased_successfully, suggested: '{query}'")
        }
        Some(decision) => decision.wire_name().to_string(),
    }
}

/// User message for `request.tier`.
pub fn user_prompt(request: &OracleRequest) -> String {
    let context = render_context(request);
    match request.tier {
        Tier::Tier1 => format!(
            r#"Analyze this food product search query and help improve it:

Search Query: "{query}"

{context}

Please analyze the search query and provide your response in this JSON format:
{REPLY_FORMAT}

Decision meanings:
- valid_product: Query looks like a valid food product
- rephrased_successfully: Query was improved/rephrased for better search
- not_a_product: Query doesn't seem to be a food product
- no_match_found: Unable to help improve the search

Focus on:
1. Is this a valid food product query?
2. Can you rephrase it to improve matching?
3. Are there common misspellings or abbreviations to expand?
4. Is the language/format causing search issues?
"#,
            query = request.query,
        ),
        Tier::Tier2 => format!(
            r#"Advanced analysis of this food product search query:

Search Query: "{query}"

{context}

Previous Analysis: {prior}

Please provide advanced analysis in this JSON format:
{REPLY_FORMAT}

Use your advanced knowledge to:
1. Identify brand names, product types, and regional variations
2. Handle abbreviations, Polish/multilingual text, and colloquialisms
3. Recognize receipt-style text (e.g., "ParówKurNatTarcz160g")
4. Suggest better search terms that might match the database
5. Consider if this is truly a food product or something else

Be more sophisticated than the initial analysis and provide the best possible search strategy.
"#,
            query = request.query,
            prior = render_prior(request.prior.as_ref()),
        ),
    }
}
