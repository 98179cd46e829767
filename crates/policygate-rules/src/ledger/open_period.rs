use crate::context::{LedgerPosting, PeriodState};
use crate::ids;
use async_trait::async_trait;
use policygate_engine::{CancellationToken, Policy, PolicyError};
use policygate_types::{PolicyOutcome, Violation, ids as core_ids};

/// Hard gate: postings into a closed period are rejected outright.
pub struct OpenPeriod;

#[async_trait]
impl Policy<LedgerPosting> for OpenPeriod {
    fn name(&self) -> &str {
        ids::POLICY_LEDGER_OPEN_PERIOD
    }

    fn order(&self) -> i32 {
        core_ids::ORDER_HARD_GATE
    }

    async fn evaluate(
        &self,
        context: &LedgerPosting,
        cancel: &CancellationToken,
    ) -> Result<PolicyOutcome, PolicyError> {
        if cancel.is_cancelled() {
            return Err(PolicyError::Cancelled);
        }

        if context.period == PeriodState::Closed {
            let violation = Violation::error(
                ids::CODE_PERIOD_CLOSED,
                format!("document '{}' posts into a closed period", context.document),
            )
            .with_field("period");
            return Ok(PolicyOutcome::fail(self.name(), violation));
        }
        Ok(PolicyOutcome::pass(self.name()))
    }
}
