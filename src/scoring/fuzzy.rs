//! String similarity primitives on a 0-100 scale.
//!
//! The base measure is normalized Levenshtein similarity (`strsim`), scaled to
//! percent. On top of it:
//! - [`partial_ratio`] compares the shorter string against every equal-length
//!   window of the longer one, so an exact substring inside a noisy field scores 100;
//! - [`token_sort_ratio`] sorts whitespace tokens first, so word order does not matter.

use strsim::normalized_levenshtein;

use crate::constants::MAX_FIELD_SCORE;

/// Similarity of two whole strings. 0 when either is empty.
pub fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    normalized_levenshtein(a, b) * MAX_FIELD_SCORE
}

/// Best [`ratio`] between the shorter string and any window of the longer one
/// with the same character length.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    if a_len == 0 || b_len == 0 {
        return 0.0;
    }

    let (shorter, short_len, longer) = if a_len <= b_len {
        (a, a_len, b)
    } else {
        (b, b_len, a)
    };

    let long_chars: Vec<char> = longer.chars().collect();
    if short_len == long_chars.len() {
        return ratio(shorter, longer);
    }

    let mut best = 0.0_f64;
    let mut window = String::with_capacity(longer.len());
    for start in 0..=(long_chars.len() - short_len) {
        window.clear();
        window.extend(&long_chars[start..start + short_len]);

        best = best.max(ratio(shorter, &window));
        if best >= MAX_FIELD_SCORE {
            break;
        }
    }
    best
}

/// [`ratio`] after sorting each string's whitespace tokens.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

fn sorted_tokens(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Similarity of a query against one candidate field, in `[0, 100]`.
///
/// Both sides are lowercased; the result is the larger of [`partial_ratio`]
/// and [`token_sort_ratio`]. Returns 0 when either side is blank.
pub fn score_field(query: &str, candidate_text: &str) -> f64 {
    if query.trim().is_empty() || candidate_text.trim().is_empty() {
        return 0.0;
    }

    let query = query.to_lowercase();
    let text = candidate_text.to_lowercase();

    partial_ratio(&query, &text)
        .max(token_sort_ratio(&query, &text))
        .clamp(0.0, MAX_FIELD_SCORE)
}
