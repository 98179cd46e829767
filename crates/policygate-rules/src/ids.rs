//! Stable identifiers for the builtin policies and their violation codes.
//!
//! Policy names are dotted namespaces, used for bypass and audit. Codes are
//! short, stable discriminators carried on violations.

// Policies: stock adjustments
pub const POLICY_STOCK_NON_ZERO_QUANTITY: &str = "stock.non_zero_quantity";
pub const POLICY_STOCK_SUFFICIENT: &str = "stock.sufficient";
pub const POLICY_STOCK_REORDER_LEVEL: &str = "stock.reorder_level";

// Policies: ledger postings
pub const POLICY_LEDGER_OPEN_PERIOD: &str = "ledger.open_period";
pub const POLICY_LEDGER_BALANCED: &str = "ledger.balanced";
pub const POLICY_LEDGER_LARGE_AMOUNT: &str = "ledger.large_amount";

// Codes: stock
pub const CODE_ZERO_QUANTITY: &str = "STK-001";
pub const CODE_INSUFFICIENT_STOCK: &str = "STK-002";
pub const CODE_REORDER_LEVEL_CROSSED: &str = "STK-W001";

// Codes: ledger
pub const CODE_PERIOD_CLOSED: &str = "LED-001";
pub const CODE_UNBALANCED_POSTING: &str = "LED-002";
pub const CODE_LARGE_AMOUNT: &str = "LED-W001";
