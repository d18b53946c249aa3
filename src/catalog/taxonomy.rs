//! Category taxonomy ingestion.
//!
//! Catalog loaders collect, for every leaf category, the full `" > "`-delimited
//! path it was seen under. [`ingest_taxonomy`] turns that mapping into
//! `(label, ancestors)` records. Entries that fail an integrity check are
//! reported and skipped; they never abort the batch.

use serde::Serialize;
use tracing::{debug, warn};
use unicode_normalization::UnicodeNormalization;

use super::error::TaxonomyError;
use crate::constants::CATEGORY_PATH_SEPARATOR;

/// A category with its ancestry, general to specific.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRecord {
    /// ASCII slug derived from `name` (see [`category_slug`]).
    pub id: String,
    pub name: String,
    pub ancestors: Vec<String>,
    pub full_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCategory {
    pub name: String,
    pub full_path: String,
    pub reason: TaxonomyError,
}

/// Outcome of one [`ingest_taxonomy`] batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxonomyReport {
    pub records: Vec<CategoryRecord>,
    pub skipped: Vec<SkippedCategory>,
}

impl TaxonomyReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Splits a full category path into its label and ancestors.
///
/// Segments are trimmed and empty ones dropped. The last segment is the label;
/// everything before it is the ancestry. An empty path yields `("", [])`.
pub fn resolve_ancestors(full_path: &str) -> (String, Vec<String>) {
    let mut segments: Vec<String> = full_path
        .split(CATEGORY_PATH_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    match segments.pop() {
        Some(label) => (label, segments),
        None => (String::new(), Vec::new()),
    }
}

/// Builds category records from a leaf-name to full-path mapping.
///
/// Input order is preserved in the report.
pub fn ingest_taxonomy<I, K, V>(mapping: I) -> TaxonomyReport
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut report = TaxonomyReport::default();

    for (name, full_path) in mapping {
        let name = name.as_ref().trim();
        let full_path = full_path.as_ref();

        match build_record(name, full_path) {
            Ok(record) => report.records.push(record),
            Err(reason) => {
                warn!(
                    category = name,
                    full_path = full_path,
                    reason = %reason,
                    "Skipping category entry"
                );
                report.skipped.push(SkippedCategory {
                    name: name.to_string(),
                    full_path: full_path.to_string(),
                    reason,
                });
            }
        }
    }

    debug!(
        records = report.records.len(),
        skipped = report.skipped.len(),
        "Taxonomy ingestion complete"
    );

    report
}

fn build_record(name: &str, full_path: &str) -> Result<CategoryRecord, TaxonomyError> {
    let (label, ancestors) = resolve_ancestors(full_path);
    if label.is_empty() {
        return Err(TaxonomyError::EmptyPath);
    }
    if label != name {
        return Err(TaxonomyError::LabelMismatch {
            expected: name.to_string(),
            resolved: label,
        });
    }

    let id = category_slug(&label);
    if id.is_empty() {
        return Err(TaxonomyError::EmptyId { name: label });
    }

    Ok(CategoryRecord {
        id,
        name: label,
        ancestors,
        full_path: full_path.to_string(),
    })
}

/// ASCII identifier for a category name.
///
/// Lowercased, spaces become `_`, `&` becomes `and`, diacritics are folded
/// (NFKD, non-ASCII dropped) and anything outside `[a-z0-9_-]` is removed.
pub fn category_slug(name: &str) -> String {
    let spelled = name.to_lowercase().replace(' ', "_").replace('&', "and");
    spelled
        .as_str()
        .nfkd()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}
