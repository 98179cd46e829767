use crate::context::LedgerPosting;
use crate::ids;
use async_trait::async_trait;
use policygate_engine::{CancellationToken, Policy, PolicyError};
use policygate_types::{PolicyOutcome, Violation, ids as core_ids};

/// Double-entry invariant: debits and credits must net to zero.
pub struct BalancedPosting;

#[async_trait]
impl Policy<LedgerPosting> for BalancedPosting {
    fn name(&self) -> &str {
        ids::POLICY_LEDGER_BALANCED
    }

    fn order(&self) -> i32 {
        core_ids::ORDER_BUSINESS_RULE
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
        let credit = context.total_credit_minor();
        if debit != credit {
            let violation = Violation::error(
                ids::CODE_UNBALANCED_POSTING,
                format!(
                    "document '{}' is out of balance: debit {} vs credit {}",
                    context.document, debit, credit
                ),
            )
            .with_field("lines")
            .with_meta("total_debit_minor", debit)
            .with_meta("total_credit_minor", credit);
            return Ok(PolicyOutcome::fail(self.name(), violation));
        }
        Ok(PolicyOutcome::pass(self.name()))
    }
}
