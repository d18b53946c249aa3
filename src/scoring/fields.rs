//! Per-field scorers built on [`score_field`].

use super::fuzzy::score_field;
use crate::constants::MAX_FIELD_SCORE;

/// Best score across localized names. 0 for an empty list.
pub fn score_names<S: AsRef<str>>(query: &str, names: &[S]) -> f64 {
    best_of(query, names)
}

pub fn score_brand(query: &str, brand: &str) -> f64 {
    score_field(query, brand)
}

/// Specificity-aware category score, capped at 100.
///
/// Non-blank categories are numbered from 0 (most general) and each score is
/// multiplied by `1.0 + specificity_step * i`. Tags are cleaned with
/// [`clean_category_tag`] and scored unweighted.
pub fn score_categories<C, T>(
    query: &str,
    categories: &[C],
    tags: &[T],
    specificity_step: f64,
) -> f64
where
    C: AsRef<str>,
    T: AsRef<str>,
{
    if query.trim().is_empty() {
        return 0.0;
    }

    let weighted = categories
        .iter()
        .map(|c| c.as_ref().trim())
        .filter(|c| !c.is_empty())
        .enumerate()
        .map(|(i, category)| score_field(query, category) * (1.0 + specificity_step * i as f64));

    let tagged = tags
        .iter()
        .map(|t| t.as_ref())
        .filter(|t| !t.is_empty())
        .map(|tag| score_field(query, &clean_category_tag(tag)));

    weighted
        .chain(tagged)
        .fold(0.0_f64, f64::max)
        .min(MAX_FIELD_SCORE)
}

/// Best score across non-blank labels. 0 for an empty list.
pub fn score_labels<S: AsRef<str>>(query: &str, labels: &[S]) -> f64 {
    best_of(query, labels)
}

pub fn score_quantity(query: &str, quantity: &str) -> f64 {
    score_field(query, quantity)
}

/// Strips a two-letter language prefix (`"en:"`) and turns hyphens into spaces.
pub fn clean_category_tag(tag: &str) -> String {
    let bytes = tag.as_bytes();
    let unprefixed = if bytes.len() >= 3
        && bytes[0].is_ascii_lowercase()
        && bytes[1].is_ascii_lowercase()
        && bytes[2] == b':'
    {
        &tag[3..]
    } else {
        tag
    };
    unprefixed.replace('-', " ")
}

fn best_of<S: AsRef<str>>(query: &str, texts: &[S]) -> f64 {
    texts
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .map(|text| score_field(query, text))
        .fold(0.0_f64, f64::max)
}
