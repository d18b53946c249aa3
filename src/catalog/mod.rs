//! Catalog records and the category-path resolver.
//!
//! - [`Candidate`]: the record shape every candidate source returns.
//! - [`LabelPolicy`] / [`display_label`]: the human-facing name of a candidate.
//! - [`resolve_ancestors`] / [`ingest_taxonomy`]: taxonomy records built from
//!   full category paths at catalog-load time.

pub mod error;
pub mod label;
pub mod taxonomy;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::TaxonomyError;
pub use label::{LabelPolicy, display_label};
pub use taxonomy::{
    CategoryRecord, SkippedCategory, TaxonomyReport, category_slug, ingest_taxonomy,
    resolve_ancestors,
};
pub use types::{Candidate, LocalizedName};
