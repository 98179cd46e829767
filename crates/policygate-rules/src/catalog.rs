//! Pre-wired pipelines over the builtin policy sets.
//!
//! These are the stock configurations callers usually want; anything more
//! bespoke is assembled directly through [`PolicyPipeline::builder`].

use crate::context::{LedgerPosting, StockAdjustment};
use crate::ledger::{BalancedPosting, LargeAmount, OpenPeriod};
use crate::stock::{NonZeroQuantity, ReorderLevel, SufficientStock};
use policygate_engine::PolicyPipeline;

/// All builtin stock policies, ordered hard gate first, advisory last.
pub fn stock_pipeline() -> PolicyPipeline<StockAdjustment> {
    PolicyPipeline::builder()
        .policy(NonZeroQuantity)
        .policy(SufficientStock)
        .policy(ReorderLevel)
        .build()
}

/// All builtin ledger policies. The large-amount review threshold is the
/// only tunable and is given in minor units.
pub fn ledger_pipeline(large_amount_threshold_minor: i64) -> PolicyPipeline<LedgerPosting> {
    PolicyPipeline::builder()
        .policy(OpenPeriod)
        .policy(BalancedPosting)
        .policy(LargeAmount::new(large_amount_threshold_minor))
        .build()
}
