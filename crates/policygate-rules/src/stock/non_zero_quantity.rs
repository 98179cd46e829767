use crate::context::StockAdjustment;
use crate::ids;
use async_trait::async_trait;
use policygate_engine::{CancellationToken, Policy, PolicyError};
use policygate_types::{PolicyOutcome, Violation, ids as core_ids};

/// Hard gate: an adjustment that moves nothing is a data-entry error.
pub struct NonZeroQuantity;

#[async_trait]
impl Policy<StockAdjustment> for NonZeroQuantity {
    fn name(&self) -> &str {
        ids::POLICY_STOCK_NON_ZERO_QUANTITY
    }

    fn order(&self) -> i32 {
        core_ids::ORDER_HARD_GATE
    }

    async fn evaluate(
        &self,
        context: &StockAdjustment,
        cancel: &CancellationToken,
    ) -> Result<PolicyOutcome, PolicyError> {
        if cancel.is_cancelled() {
            return Err(PolicyError::Cancelled);
        }

        if context.quantity_delta == 0 {
            let violation = Violation::error(
                ids::CODE_ZERO_QUANTITY,
                format!(
                    "stock adjustment for '{}' has a zero quantity delta",
                    context.item
                ),
            )
            .with_field("quantity_delta");
            return Ok(PolicyOutcome::fail(self.name(), violation));
        }
        Ok(PolicyOutcome::pass(self.name()))
    }
}
