use crate::error::PipelineError;
use crate::options::CompletionStrategy;
use policygate_types::{PolicyOutcome, Severity, Violation};
use time::OffsetDateTime;

/// Per-severity tally over every violation in a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub info: u32,
    pub warning: u32,
    pub error: u32,
    pub critical: u32,
}

impl SeverityCounts {
    fn tally<'a>(violations: impl Iterator<Item = &'a Violation>) -> Self {
        let mut counts = SeverityCounts::default();
        for v in violations {
            match v.severity {
                Severity::Info => counts.info += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Error => counts.error += 1,
                Severity::Critical => counts.critical += 1,
            }
        }
        counts
    }
}

/// The aggregate result of one pipeline run.
///
/// A pure read model over the outcome list: everything beyond the stored
/// outcomes, context type name, and completion timestamp is computed on
/// access and safe to query repeatedly.
#[derive(Clone, Debug)]
pub struct PipelineReport {
    outcomes: Vec<PolicyOutcome>,
    context_type: &'static str,
    strategy: CompletionStrategy,
    completed_at: OffsetDateTime,
}

impl PipelineReport {
    pub(crate) fn new(
        outcomes: Vec<PolicyOutcome>,
        context_type: &'static str,
        strategy: CompletionStrategy,
    ) -> Self {
        Self {
            outcomes,
            context_type,
            strategy,
            completed_at: OffsetDateTime::now_utc(),
        }
    }

    /// All outcomes, in execution order (ascending policy order; ties in
    /// registration order — never completion order).
    pub fn outcomes(&self) -> &[PolicyOutcome] {
        &self.outcomes
    }

    pub fn context_type(&self) -> &'static str {
        self.context_type
    }

    pub fn strategy(&self) -> CompletionStrategy {
        self.strategy
    }

    pub fn completed_at(&self) -> OffsetDateTime {
        self.completed_at
    }

    /// Number of policies that actually ran (bypassed and disabled policies
    /// are excluded before execution and never counted).
    pub fn evaluated_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of outcomes carrying at least one blocking violation.
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.succeeded()).count()
    }

    /// Every violation from every outcome, flattened in execution order.
    pub fn all_violations(&self) -> impl Iterator<Item = &Violation> {
        self.outcomes.iter().flat_map(|o| o.violations().iter())
    }

    /// Violations with severity >= Error.
    pub fn blocking_violations(&self) -> impl Iterator<Item = &Violation> {
        self.all_violations().filter(|v| v.is_blocking())
    }

    /// Violations with severity < Error.
    pub fn advisory_violations(&self) -> impl Iterator<Item = &Violation> {
        self.all_violations().filter(|v| !v.is_blocking())
    }

    /// True iff no outcome carries a blocking violation.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(PolicyOutcome::succeeded)
    }

    pub fn counts(&self) -> SeverityCounts {
        SeverityCounts::tally(self.all_violations())
    }

    /// Opt back into exception-style handling after the fact: returns the
    /// report unchanged on success, or the same failure signal `execute`
    /// raises under `fail_on_error`.
    pub fn into_result(self) -> Result<Self, PipelineError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(PipelineError::Failed {
                report: Box::new(self),
            })
        }
    }
}
