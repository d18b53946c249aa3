//! Cross-cutting, shared constants.
//!
//! These are defaults only. Every value that affects ranking or refinement is
//! carried through [`Config`](crate::config::Config) so it can be retuned without
//! a rebuild.

/// Weight applied to the best localized-name score.
pub const DEFAULT_NAME_WEIGHT: f64 = 3.0;
/// Weight applied to the brand score.
pub const DEFAULT_BRAND_WEIGHT: f64 = 2.0;
/// Weight applied to the specificity-aware category score.
pub const DEFAULT_CATEGORY_WEIGHT: f64 = 1.5;
/// Weight applied to the best label score.
pub const DEFAULT_LABEL_WEIGHT: f64 = 1.0;
/// Weight applied to the quantity score.
pub const DEFAULT_QUANTITY_WEIGHT: f64 = 0.5;

/// Per-position boost for categories: position `i` is weighted `1.0 + step * i`.
pub const DEFAULT_SPECIFICITY_STEP: f64 = 0.1;

/// Upper bound of a single field similarity.
pub const MAX_FIELD_SCORE: f64 = 100.0;

/// Language tag of the preferred localized name.
pub const DEFAULT_PRIMARY_NAME_TAG: &str = "main";

/// Top weighted score at or above which a match is accepted without the oracle.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 55.0;

/// Fetch + rank rounds a single search may use.
pub const DEFAULT_MAX_ROUNDS: usize = 3;

pub const DEFAULT_TIER1_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TIER2_MODEL: &str = "gpt-4";

pub const DEFAULT_ORACLE_TIMEOUT_SECS: u64 = 30;

/// Separator between segments of a full category path (`"Food > Spreads"`).
pub const CATEGORY_PATH_SEPARATOR: &str = " > ";

/// Separator that marks a namespaced category (`"en:spreads"`).
pub const NAMESPACE_SEPARATOR: char = ':';

/// Maximum characters of free-text oracle reasoning kept from a non-JSON reply.
pub const MAX_REASONING_CHARS: usize = 200;
