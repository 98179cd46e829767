use crate::context::StockAdjustment;
use crate::ids;
use async_trait::async_trait;
use policygate_engine::{CancellationToken, Policy, PolicyError};
use policygate_types::{PolicyOutcome, Violation, ids as core_ids};

/// An adjustment must never drive on-hand stock negative.
pub struct SufficientStock;

#[async_trait]
impl Policy<StockAdjustment> for SufficientStock {
    fn name(&self) -> &str {
        ids::POLICY_STOCK_SUFFICIENT
    }

    fn order(&self) -> i32 {
        core_ids::ORDER_BUSINESS_RULE
    }

    async fn evaluate(
        &self,
        context: &StockAdjustment,
        cancel: &CancellationToken,
    ) -> Result<PolicyOutcome, PolicyError> {
        if cancel.is_cancelled() {
            return Err(PolicyError::Cancelled);
        }

        let resulting = context.resulting_stock();
        if resulting < 0 {
            let violation = Violation::error(
                ids::CODE_INSUFFICIENT_STOCK,
                format!(
                    "adjustment of {} for '{}' would leave {} on hand (currently {})",
                    context.quantity_delta, context.item, resulting, context.on_hand
                ),
            )
            .with_field("quantity_delta")
            .with_meta("on_hand", context.on_hand)
            .with_meta("quantity_delta", context.quantity_delta)
            .with_meta("resulting_stock", resulting);
            return Ok(PolicyOutcome::fail(self.name(), violation));
        }
        Ok(PolicyOutcome::pass(self.name()))
    }
}
