use std::collections::HashMap;
use std::sync::Mutex;

use super::error::SourceError;
use super::source::CandidateSource;
use crate::catalog::Candidate;
use crate::normalize::normalize;

/// In-memory candidate source keyed by canonical query.
///
/// Keys passed to the builders are normalized, so tests may register raw
/// spellings. Queries without a registered response get the default list.
#[derive(Debug, Default)]
pub struct MockCandidateSource {
    responses: HashMap<String, Result<Vec<Candidate>, SourceError>>,
    default: Vec<Candidate>,
    fetched: Mutex<Vec<String>>,
}

impl MockCandidateSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, query: &str, candidates: Vec<Candidate>) -> Self {
        self.responses.insert(normalize(query), Ok(candidates));
        self
    }

    pub fn with_failure(mut self, query: &str, error: SourceError) -> Self {
        self.responses.insert(normalize(query), Err(error));
        self
    }

    pub fn with_default(mut self, candidates: Vec<Candidate>) -> Self {
        self.default = candidates;
        self
    }

    /// Queries received so far, in call order.
    pub fn fetches(&self) -> Vec<String> {
        self.fetched.lock().map(|f| f.clone()).unwrap_or_default()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetched.lock().map(|f| f.len()).unwrap_or(0)
    }
}

impl CandidateSource for MockCandidateSource {
    async fn fetch(&self, query: &str) -> Result<Vec<Candidate>, SourceError> {
        self.fetched
            .lock()
            .map_err(|_| SourceError::Unavailable {
                reason: "lock poisoned".to_string(),
            })?
            .push(query.to_string());

        match self.responses.get(query) {
            Some(response) => response.clone(),
            None => Ok(self.default.clone()),
        }
    }
}
