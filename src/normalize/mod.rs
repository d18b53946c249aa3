//! Query canonicalization.
//!
//! Receipt-style input glues words, acronyms and quantities together
//! (`"BorówkaAmeryk500g"`). [`normalize`] pulls those apart into a lowercase,
//! single-spaced string that the fuzzy scorers and the candidate source can
//! tokenize on whitespace.
//!
//! The function is total and idempotent: any input (including absent input via
//! [`normalize_opt`]) produces a string, and `normalize(normalize(s)) == normalize(s)`.

#[cfg(test)]
mod tests;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

// Capitals without a lowercase form (`ℂ`, `𝐀`) survive step 4 unchanged, so
// they never count as word starts. Otherwise a second pass would split them.
static LOWER_UPPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\p{Ll})([\p{Lu}&&\p{Changes_When_Lowercased}])").expect("static regex is valid")
});

static ACRONYM_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"([\p{Lu}&&\p{Changes_When_Lowercased}]+)([\p{Lu}&&\p{Changes_When_Lowercased}]\p{Ll})",
    )
    .expect("static regex is valid")
});

static LETTER_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\p{L})(\d)").expect("static regex is valid"));

static DIGIT_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d)(\p{L})").expect("static regex is valid"));

/// Canonicalizes a raw query string.
///
/// Steps, each applied to the previous output:
/// 1. `,` and `;` become spaces.
/// 2. camelCase and acronym boundaries are split (`"XMLHttp"` -> `"XML Http"`).
/// 3. letters and digits are split apart in both directions.
/// 4. Unicode lowercase.
/// 5. whitespace runs collapse to one space, ends are trimmed.
pub fn normalize(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let spaced = raw.replace([',', ';'], " ");
    let split = split_camel_case(&spaced);
    let split = LETTER_DIGIT.replace_all(&split, "$1 $2");
    let split = DIGIT_LETTER.replace_all(&split, "$1 $2");
    let lowered = split.to_lowercase();

    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// [`normalize`] for input that may be absent. `None` yields the empty string.
pub fn normalize_opt(raw: Option<&str>) -> String {
    raw.map(normalize).unwrap_or_default()
}

fn split_camel_case(text: &str) -> String {
    let text = LOWER_UPPER.replace_all(text, "$1 $2");
    ACRONYM_WORD.replace_all(&text, "$1 $2").into_owned()
}

/// A raw query paired with its canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    raw: String,
    canonical: String,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let canonical = normalize(&raw);
        Self { raw, canonical }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// `true` when nothing survives canonicalization.
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical)
    }
}
