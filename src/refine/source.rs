use super::error::SourceError;
use crate::catalog::Candidate;

/// Retrieves raw candidates for a canonical query.
///
/// Implementations wrap whatever index backs the catalog (a text index, a
/// document store, a vector database). The order of the returned list is not
/// relied upon; the controller re-ranks it.
pub trait CandidateSource: Send + Sync {
    fn fetch(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Candidate>, SourceError>> + Send;
}
