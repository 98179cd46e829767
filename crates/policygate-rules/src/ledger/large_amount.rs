use crate::context::LedgerPosting;
use crate::ids;
use async_trait::async_trait;
use policygate_engine::{CancellationToken, Policy, PolicyError};
use policygate_types::{PolicyOutcome, Violation, ids as core_ids};

/// Advisory: flags postings above a configured amount for review.
///
/// The threshold is wiring-time configuration; the instance itself stays
/// stateless across pipeline runs.
pub struct LargeAmount {
    threshold_minor: i64,
}

impl LargeAmount {
    pub fn new(threshold_minor: i64) -> Self {
        Self { threshold_minor }
    }
}

#[async_trait]
impl Policy<LedgerPosting> for LargeAmount {
    fn name(&self) -> &str {
        ids::POLICY_LEDGER_LARGE_AMOUNT
    }

    fn order(&self) -> i32 {
        core_ids::ORDER_ADVISORY
    }

    async fn evaluate(
        &self,
        context: &LedgerPosting,
        cancel: &CancellationToken,
    ) -> Result<PolicyOutcome, PolicyError> {
        if cancel.is_cancelled() {
            return Err(PolicyError::Cancelled);
        }

        let debit = context.total_debit_minor();
        if debit > self.threshold_minor {
            let violation = Violation::warning(
                ids::CODE_LARGE_AMOUNT,
                format!(
                    "document '{}' posts {} minor units, above the review threshold of {}",
                    context.document, debit, self.threshold_minor
                ),
            )
            .with_meta("total_debit_minor", debit)
            .with_meta("threshold_minor", self.threshold_minor);
            return Ok(PolicyOutcome::fail(self.name(), violation));
        }
        Ok(PolicyOutcome::pass(self.name()))
    }
}
