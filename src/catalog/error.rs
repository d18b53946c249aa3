use thiserror::Error;

/// Why a taxonomy entry was not turned into a [`CategoryRecord`](super::CategoryRecord).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    /// The path had no non-empty segments.
    #[error("category path is empty")]
    EmptyPath,

    /// The last path segment is not the category the entry is keyed by.
    #[error("resolved label '{resolved}' does not match expected category '{expected}'")]
    LabelMismatch { expected: String, resolved: String },

    /// Nothing is left of the name after slugging it into an id.
    #[error("category '{name}' produces an empty id")]
    EmptyId { name: String },
}
