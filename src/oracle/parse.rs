//! Reply parsing for chat-provider oracles.
//!
//! A reply is read as the JSON object spanning its first `{` to its last `}`.
//! Replies without braces fall back to keyword detection, checked in the order
//! `not_a_product`, `rephrased`/`improved`, `valid`.

use serde::Deserialize;
use serde_json::Value;

use super::types::RefinementDecision;
use crate::constants::MAX_REASONING_CHARS;

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReply {
    pub decision: RefinementDecision,
    pub confidence: f64,
    pub reasoning: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawReply {
    #[serde(default)]
    decision: Option<String>,
    #[serde(default)]
    rephrased_query: Option<String>,
    #[serde(default)]
    confidence: Option<Value>,
    #[serde(default)]
    reasoning: Option<String>,
}

pub fn parse_reply(content: &str) -> ParsedReply {
    match json_span(content) {
        Some(span) => match serde_json::from_str::<RawReply>(span) {
            Ok(raw) => from_raw(raw),
            Err(e) => ParsedReply {
                decision: RefinementDecision::inconclusive(format!("malformed JSON reply: {e}")),
                confidence: 0.0,
                reasoning: truncate_reasoning(content),
            },
        },
        None => ParsedReply {
            decision: keyword_decision(content),
            confidence: 0.0,
            reasoning: truncate_reasoning(content),
        },
    }
}

/// Maps a wire decision name to a decision.
///
/// `rephrased_successfully` without a non-blank query is inconclusive.
pub fn decision_from_wire(wire: &str, rephrased_query: Option<&str>) -> RefinementDecision {
    match wire.trim() {
        "valid_product" => RefinementDecision::ValidMatch,
        "not_a_product" => RefinementDecision::NotAProduct,
        "rephrased_successfully" => match rephrased_query.map(str::trim) {
            Some(query) if !query.is_empty() => RefinementDecision::Rephrased {
                query: query.to_string(),
            },
            _ => RefinementDecision::inconclusive("rephrased_successfully without a query"),
        },
        "no_match_found" => RefinementDecision::inconclusive("oracle found no match"),
        other => RefinementDecision::inconclusive(format!("unknown decision '{other}'")),
    }
}

/// First 200 characters, with `...` appended when cut.
pub fn truncate_reasoning(content: &str) -> String {
    if content.chars().count() <= MAX_REASONING_CHARS {
        return content.to_string();
    }
    let mut out: String = content.chars().take(MAX_REASONING_CHARS).collect();
    out.push_str("...");
    out
}

fn json_span(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    (end > start).then(|| &content[start..=end])
}

fn from_raw(raw: RawReply) -> ParsedReply {
    let decision = decision_from_wire(
        raw.decision.as_deref().unwrap_or("no_match_found"),
        raw.rephrased_query.as_deref(),
    );
    ParsedReply {
        decision,
        confidence: raw.confidence.as_ref().map_or(0.0, confidence_value),
        reasoning: raw.reasoning.unwrap_or_default(),
    }
}

fn confidence_value(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed
        .filter(|c| c.is_finite())
        .map_or(0.0, |c| c.clamp(0.0, 1.0))
}

fn keyword_decision(content: &str) -> RefinementDecision {
    let lower = content.to_lowercase();
    if lower.contains("not_a_product") {
        RefinementDecision::NotAProduct
    } else if lower.contains("rephrased") || lower.contains("improved") {
        decision_from_wire("rephrased_successfully", None)
    } else if lower.contains("valid") {
        RefinementDecision::ValidMatch
    } else {
        RefinementDecision::inconclusive("no decision in reply")
    }
}
