//! Fuzzy field scoring.
//!
//! [`score_field`] is the single similarity primitive (0-100). The field
//! scorers in [`fields`] apply it to names, brand, categories, labels and
//! quantity; the [`ranking`](crate::ranking) module combines their outputs.

pub mod fields;
pub mod fuzzy;


pub use fields::{
    clean_category_tag, score_brand, score_categories, score_labels, score_names, score_quantity,
};
pub use fuzzy::{partial_ratio, ratio, score_field, token_sort_ratio};
