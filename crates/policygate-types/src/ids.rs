//! Stable identifiers for synthetic violations and metadata keys.
//!
//! Violation `code` values are short, stable, machine-readable discriminators.
//! Business policies define their own codes; only the codes the engine itself
//! can emit live here.

/// Code of the synthetic violation the engine emits when a policy evaluation
/// faults instead of returning an outcome.
pub const CODE_POLICY_EXCEPTION: &str = "POLICY_EXCEPTION";

// Metadata keys: POLICY_EXCEPTION
pub const META_ERROR: &str = "error";
pub const META_ERROR_CHAIN: &str = "error_chain";
pub const META_POLICY_ORDER: &str = "policy_order";

// Ordering convention for policy authors. These ranges are documentation
// only; the engine never enforces them.
//
// 1-9     hard gate (must pass before anything else is worth running)
// 10-49   business rule
// 50-79   cross-module consistency
// 80-99   advisory
// 100+    default
pub const ORDER_HARD_GATE: i32 = 1;
pub const ORDER_BUSINESS_RULE: i32 = 10;
pub const ORDER_CROSS_MODULE: i32 = 50;
pub const ORDER_ADVISORY: i32 = 80;
pub const ORDER_DEFAULT: i32 = 100;
