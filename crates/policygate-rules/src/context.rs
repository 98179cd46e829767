//! The transaction contexts the builtin policies validate.
//!
//! Contexts are opaque to the engine; only the policies in this crate read
//! them. Monetary amounts are integer minor units (cents), stock quantities
//! are whole units.

/// A pending stock movement for one item in one warehouse.
#[derive(Clone, Debug)]
pub struct StockAdjustment {
    pub item: String,
    pub warehouse: String,
    /// Signed quantity change; negative for issues, positive for receipts.
    pub quantity_delta: i64,
    /// Quantity on hand before this adjustment is applied.
    pub on_hand: i64,
    /// Reorder threshold configured for this item/warehouse.
    pub reorder_level: i64,
}

impl StockAdjustment {
    /// Quantity on hand after this adjustment would be applied.
    pub fn resulting_stock(&self) -> i64 {
        self.on_hand + self.quantity_delta
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeriodState {
    Open,
    Closed,
}

/// One debit/credit line of a posting.
#[derive(Clone, Debug)]
pub struct EntryLine {
    pub account: String,
    pub debit_minor: i64,
    pub credit_minor: i64,
}

/// A pending journal posting.
#[derive(Clone, Debug)]
pub struct LedgerPosting {
    pub document: String,
    pub period: PeriodState,
    pub lines: Vec<EntryLine>,
}

impl LedgerPosting {
    pub fn total_debit_minor(&self) -> i64 {
        self.lines.iter().map(|l| l.debit_minor).sum()
    }

    pub fn total_credit_minor(&self) -> i64 {
        self.lines.iter().map(|l| l.credit_minor).sum()
    }
}
