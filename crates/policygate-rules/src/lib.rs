//! Builtin business policies for ERP-style transactions.
//!
//! Input: a context value (stock adjustment, ledger posting). Output: one
//! [`policygate_types::PolicyOutcome`] per policy, produced through the
//! engine's `Policy` trait. Every policy here is stateless, constructed at
//! wiring time, and reused across pipeline runs.

#![forbid(unsafe_code)]

pub mod context;
pub mod ids;
pub mod ledger;
pub mod stock;

mod catalog;

pub use catalog::{ledger_pipeline, stock_pipeline};
