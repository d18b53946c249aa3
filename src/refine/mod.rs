//! Query refinement: the bounded fetch, rank, consult loop.
//!
//! [`RefinementController`] is the only component that talks to the
//! [`CandidateSource`] and the [`RephrasingOracle`](crate::oracle::RephrasingOracle).

pub mod config;
pub mod controller;
pub mod error;
pub mod session;
pub mod source;
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use config::RefinementConfig;
pub use controller::RefinementController;
pub use error::SourceError;
pub use session::Session;
pub use source::CandidateSource;
pub use types::{
    Confidence, ControllerState, MatchStatus, OracleExchange, RoundSummary, SearchOutcome,
};

#[cfg(any(test, feature = "mock"))]
pub use mock::MockCandidateSource;
