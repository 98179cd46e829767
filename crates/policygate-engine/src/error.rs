use crate::report::PipelineReport;

/// Abnormal pipeline termination.
///
/// Only two conditions use the error channel, both deliberate: caller
/// cancellation, and the opt-in `fail_on_error` escape. Everything else —
/// business violations and contained policy faults — is resolved to a value.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The caller's cancellation signal fired before the pipeline finished.
    /// Remaining tiers and policies were skipped.
    #[error("policy pipeline cancelled before completion")]
    Cancelled,

    /// Raised only when `fail_on_error` was requested and the run produced
    /// blocking violations. Carries the full report, so the catcher loses
    /// nothing relative to the value-returning path.
    #[error("policy pipeline failed with {} blocking violation(s)", .report.blocking_violations().count())]
    Failed { report: Box<PipelineReport> },
}

impl PipelineError {
    /// The report attached to a failure, if this is one.
    pub fn report(&self) -> Option<&PipelineReport> {
        match self {
            PipelineError::Failed { report } => Some(report),
            PipelineError::Cancelled => None,
        }
    }

    /// Consume the error, recovering the report from a failure.
    pub fn into_report(self) -> Option<PipelineReport> {
        match self {
            PipelineError::Failed { report } => Some(*report),
            PipelineError::Cancelled => None,
        }
    }
}
