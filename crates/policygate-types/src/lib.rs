//! Stable value types and IDs used across the policygate workspace.
//!
//! This crate is intentionally boring:
//! - the severity model and the violation value type
//! - the per-policy outcome record
//! - stable string codes, metadata keys, and ordering-convention constants

#![forbid(unsafe_code)]

pub mod ids;
pub mod outcome;
pub mod violation;

pub use outcome::PolicyOutcome;
pub use violation::{Severity, Violation};
