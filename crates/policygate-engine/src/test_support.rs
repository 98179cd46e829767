//! Shared fixtures for the unit and property tests in this crate.

use crate::policy::{Policy, PolicyError};
use async_trait::async_trait;
use policygate_types::{PolicyOutcome, Violation};
use tokio_util::sync::CancellationToken;

/// What a [`TestPolicy`] does when evaluated.
pub enum Behavior {
    Pass,
    Violate(Violation),
    Fault(String),
}

/// Scriptable policy over the unit context `()`.
pub struct TestPolicy {
    name: String,
    order: i32,
    behavior: Behavior,
}

impl TestPolicy {
    fn new(name: &str, order: i32, behavior: Behavior) -> Self {
        Self {
            name: name.to_string(),
            order,
            behavior,
        }
    }

    pub fn pass(name: &str, order: i32) -> Self {
        Self::new(name, order, Behavior::Pass)
    }

    pub fn violate(name: &str, order: i32, violation: Violation) -> Self {
        Self::new(name, order, Behavior::Violate(violation))
    }

    pub fn fault(name: &str, order: i32, message: &str) -> Self {
        Self::new(name, order, Behavior::Fault(message.to_string()))
    }
}

#[async_trait]
impl Policy<()> for TestPolicy {
    fn name(&self) -> &str {
        &self.name
    }

    fn order(&self) -> i32 {
        self.order
    }

    async fn evaluate(
        &self,
        _context: &(),
        _cancel: &CancellationToken,
    ) -> Result<PolicyOutcome, PolicyError> {
        match &self.behavior {
            Behavior::Pass => Ok(PolicyOutcome::pass(&self.name)),
            Behavior::Violate(v) => Ok(PolicyOutcome::fail(&self.name, v.clone())),
            Behavior::Fault(message) => Err(PolicyError::Faulted(anyhow::anyhow!("{message}"))),
        }
    }
}
