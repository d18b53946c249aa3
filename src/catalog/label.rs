//! Display-label resolution.
//!
//! Precedence (a user-visible contract, do not reorder):
//! 1. the most specific category that is non-blank and not namespaced;
//! 2. the first non-empty name tagged with the primary language tag;
//! 3. the first non-empty name;
//! 4. the empty string.

use super::types::Candidate;
use crate::constants::{DEFAULT_PRIMARY_NAME_TAG, NAMESPACE_SEPARATOR};

/// How display labels are picked for candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPolicy {
    /// Language tag of the preferred localized name. Default: `"main"`.
    pub primary_name_tag: String,

    /// When set, a category namespaced with this prefix (`"pl:czekolada"`,
    /// case-insensitive) is accepted at its position with the prefix removed,
    /// instead of being skipped like other namespaced entries. Default: `None`.
    pub preferred_namespace: Option<String>,
}

impl Default for LabelPolicy {
    fn default() -> Self {
        Self {
            primary_name_tag: DEFAULT_PRIMARY_NAME_TAG.to_string(),
            preferred_namespace: None,
        }
    }
}

impl LabelPolicy {
    pub fn new(primary_name_tag: impl Into<String>) -> Self {
        Self {
            primary_name_tag: primary_name_tag.into(),
            preferred_namespace: None,
        }
    }

    pub fn with_preferred_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.preferred_namespace = Some(namespace.into());
        self
    }

    pub fn display_label(&self, candidate: &Candidate) -> String {
        if let Some(category) = self.category_label(&candidate.categories) {
            return category.to_string();
        }

        candidate
            .names
            .iter()
            .find(|name| name.lang == self.primary_name_tag && !name.text.is_empty())
            .or_else(|| candidate.names.iter().find(|name| !name.text.is_empty()))
            .map(|name| name.text.clone())
            .unwrap_or_default()
    }

    fn category_label<'a>(&self, categories: &'a [String]) -> Option<&'a str> {
        categories.iter().rev().find_map(|category| {
            let category = category.trim();
            if category.is_empty() {
                return None;
            }
            if let Some(stripped) = self.strip_preferred_namespace(category) {
                return (!stripped.is_empty()).then_some(stripped);
            }
            (!category.contains(NAMESPACE_SEPARATOR)).then_some(category)
        })
    }

    fn strip_preferred_namespace<'a>(&self, category: &'a str) -> Option<&'a str> {
        let namespace = self.preferred_namespace.as_deref()?;
        let (prefix, rest) = category.split_once(NAMESPACE_SEPARATOR)?;
        prefix
            .eq_ignore_ascii_case(namespace)
            .then(|| rest.trim())
    }
}

/// Label for `candidate` under the default [`LabelPolicy`].
pub fn display_label(candidate: &Candidate) -> String {
    LabelPolicy::default().display_label(candidate)
}
