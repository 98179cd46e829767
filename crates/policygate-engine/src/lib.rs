//! The policy execution pipeline.
//!
//! Input: a set of policies registered for one context type, sorted once at
//! build time. Output: one [`PipelineReport`] per `execute` call, folding
//! every policy outcome into a single pass/fail decision.
//!
//! The engine owns all of the control-flow design in this system: selection,
//! tier grouping, sequential or bounded-concurrent execution, fault
//! containment, early termination, and aggregation. Policies themselves are
//! opaque async checks consumed through the [`Policy`] trait.

#![forbid(unsafe_code)]

pub mod options;
pub mod policy;
pub mod report;

mod engine;
mod error;

#[cfg(test)]
mod proptest;
#[cfg(test)]
pub(crate) mod test_support;

pub use engine::{PipelineBuilder, PolicyPipeline};
pub use error::PipelineError;
pub use options::{CompletionStrategy, ExecutionOptions};
pub use policy::{Policy, PolicyError};
pub use report::PipelineReport;

// Re-exported so policy implementations do not need a direct tokio-util
// dependency for the evaluation signature.
pub use tokio_util::sync::CancellationToken;
