//! Rephrasing oracle seam.
//!
//! The refinement controller consults a [`RephrasingOracle`] when the best
//! candidate is too weak. [`GenaiOracle`] talks to a chat-completion provider;
//! [`MockOracle`] answers from a script in tests.

pub mod chat;
pub mod config;
pub mod error;
pub mod parse;
pub mod prompt;
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use chat::GenaiOracle;
pub use config::OracleConfig;
pub use error::{OracleError, OracleResult};
pub use parse::{ParsedReply, decision_from_wire, parse_reply, truncate_reasoning};
pub use types::{OracleRequest, OracleVerdict, RefinementDecision, ShortlistEntry, Tier};

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockOracle, MockReply};

/// Answers whether a weak query is a product and how to rephrase it.
pub trait RephrasingOracle: Send + Sync {
    fn ask(
        &self,
        request: &OracleRequest,
    ) -> impl std::future::Future<Output = Result<OracleVerdict, OracleError>> + Send;
}
