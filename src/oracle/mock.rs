use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use super::error::OracleError;
use super::types::{OracleRequest, OracleVerdict, RefinementDecision, Tier};
use super::RephrasingOracle;

/// A scripted reply for [`MockOracle`].
#[derive(Debug, Clone)]
pub enum MockReply {
    Decision(RefinementDecision),
    /// Fails with [`OracleError::Provider`].
    Fail(String),
    /// Sleeps before answering with the decision.
    Delayed(Duration, RefinementDecision),
}

#[derive(Debug, Default)]
struct Script {
    queue: VecDeque<MockReply>,
    fallback: Option<MockReply>,
}

/// Oracle that answers from per-tier scripts and records every request.
///
/// Scripted replies are consumed in order; once a tier's queue is empty its
/// fallback answers (see [`MockOracle::always`]). A tier with neither replies
/// [`OracleError::NotConfigured`].
#[derive(Debug, Default)]
pub struct MockOracle {
    tier1: Mutex<Script>,
    tier2: Mutex<Script>,
    requests: Mutex<Vec<OracleRequest>>,
}

impl MockOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Oracle that gives the same decision on every call of every tier.
    pub fn always(decision: RefinementDecision) -> Self {
        let oracle = Self::new();
        oracle.set_fallback(Tier::Tier1, MockReply::Decision(decision.clone()));
        oracle.set_fallback(Tier::Tier2, MockReply::Decision(decision));
        oracle
    }

    pub fn with_reply(self, tier: Tier, decision: RefinementDecision) -> Self {
        self.push(tier, MockReply::Decision(decision));
        self
    }

    pub fn with_failure(self, tier: Tier, reason: impl Into<String>) -> Self {
        self.push(tier, MockReply::Fail(reason.into()));
        self
    }

    pub fn with_delayed_reply(
        self,
        tier: Tier,
        delay: Duration,
        decision: RefinementDecision,
    ) -> Self {
        self.push(tier, MockReply::Delayed(delay, decision));
        self
    }

    pub fn with_fallback(self, tier: Tier, reply: MockReply) -> Self {
        self.set_fallback(tier, reply);
        self
    }

    /// Every request received so far, in call order.
    pub fn requests(&self) -> Vec<OracleRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn calls_for(&self, tier: Tier) -> usize {
        self.requests
            .lock()
            .map(|r| r.iter().filter(|req| req.tier == tier).count())
            .unwrap_or(0)
    }

    fn script(&self, tier: Tier) -> &Mutex<Script> {
        match tier {
            Tier::Tier1 => &self.tier1,
            Tier::Tier2 => &self.tier2,
        }
    }

    fn push(&self, tier: Tier, reply: MockReply) {
        if let Ok(mut script) = self.script(tier).lock() {
            script.queue.push_back(reply);
        }
    }

    fn set_fallback(&self, tier: Tier, reply: MockReply) {
        if let Ok(mut script) = self.script(tier).lock() {
            script.fallback = Some(reply);
        }
    }

    fn next_reply(&self, tier: Tier) -> Result<Option<MockReply>, OracleError> {
        let mut script = self
            .script(tier)
            .lock()
            .map_err(|_| OracleError::Provider {
                model: mock_model(tier),
                reason: "lock poisoned".to_string(),
            })?;
        Ok(script.queue.pop_front().or_else(|| script.fallback.clone()))
    }
}

fn mock_model(tier: Tier) -> String {
    format!("mock-{tier}")
}

impl RephrasingOracle for MockOracle {
    async fn ask(&self, request: &OracleRequest) -> Result<OracleVerdict, OracleError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        let model = mock_model(request.tier);
        match self.next_reply(request.tier)? {
            None => Err(OracleError::NotConfigured),
            Some(MockReply::Decision(decision)) => {
                Ok(OracleVerdict::new(decision, model).with_confidence(0.9))
            }
            Some(MockReply::Fail(reason)) => Err(OracleError::Provider { model, reason }),
            Some(MockReply::Delayed(delay, decision)) => {
                tokio::time::sleep(delay).await;
                Ok(OracleVerdict::new(decision, model).with_confidence(0.9))
            }
        }
    }
}
