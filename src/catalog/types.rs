use serde::{Deserialize, Serialize};

/// A product name in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    /// Language tag (`"pl"`, `"en"`, or the primary tag such as `"main"`).
    pub lang: String,
    pub text: String,
}

impl LocalizedName {
    pub fn new(lang: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            text: text.into(),
        }
    }
}

/// A catalog record returned by a [`CandidateSource`](crate::refine::CandidateSource).
///
/// `categories` is ordered general to specific. Entries may be namespaced
/// (`"en:spreads"`); `category_tags` are the machine tags
/// (`"en:chocolate-spreads"`) that accompany them in most catalogs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    #[serde(default)]
    pub names: Vec<LocalizedName>,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub category_tags: Vec<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub quantity: String,
    /// Relevance reported by the candidate source (e.g. a text-index score).
    #[serde(default)]
    pub base_score: f64,
}

impl Candidate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, lang: impl Into<String>, text: impl Into<String>) -> Self {
        self.names.push(LocalizedName::new(lang, text));
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_category_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = quantity.into();
        self
    }

    pub fn with_base_score(mut self, base_score: f64) -> Self {
        self.base_score = base_score;
        self
    }

    /// Non-empty name texts in list order, each text once.
    pub fn unique_names(&self) -> Vec<&str> {
        let mut seen = Vec::with_capacity(self.names.len());
        for name in &self.names {
            let text = name.text.as_str();
            if !text.is_empty() && !seen.contains(&text) {
                seen.push(text);
            }
        }
        seen
    }
}
