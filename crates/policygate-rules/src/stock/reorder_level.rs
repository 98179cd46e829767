use crate::context::StockAdjustment;
use crate::ids;
use async_trait::async_trait;
use policygate_engine::{CancellationToken, Policy, PolicyError};
use policygate_types::{PolicyOutcome, Violation, ids as core_ids};

/// Advisory: warns when an adjustment crosses the reorder level.
///
/// The warning fires only on the crossing call — on-hand stock above the
/// level before, at or below it after. A transaction against an item that is
/// already at or below its reorder level does not re-fire the warning; that
/// call was warned about when the level was first crossed.
pub struct ReorderLevel;

#[async_trait]
impl Policy<StockAdjustment> for ReorderLevel {
    fn name(&self) -> &str {
        ids::POLICY_STOCK_REORDER_LEVEL
    }

    fn order(&self) -> i32 {
        core_ids::ORDER_ADVISORY
    }

    async fn evaluate(
        &self,
        context: &StockAdjustment,
        cancel: &CancellationToken,
    ) -> Result<PolicyOutcome, PolicyError> {
        if cancel.is_cancelled() {
            return Err(PolicyError::Cancelled);
        }

        let before = context.on_hand;
        let after = context.resulting_stock();
        let level = context.reorder_level;

        if before > level && after <= level {
            let violation = Violation::warning(
                ids::CODE_REORDER_LEVEL_CROSSED,
                format!(
                    "'{}' in '{}' falls to {} units, at or below the reorder level of {}",
                    context.item, context.warehouse, after, level
                ),
            )
            .with_meta("reorder_level", level)
            .with_meta("resulting_stock", after);
            return Ok(PolicyOutcome::fail(self.name(), violation));
        }
        Ok(PolicyOutcome::pass(self.name()))
    }
}
