use std::collections::BTreeSet;
use std::num::NonZeroUsize;

/// When the pipeline stops evaluating further tiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompletionStrategy {
    /// Run every selected policy; favors completeness (UI / report use).
    #[default]
    CollectAll,
    /// Stop after the first tier that produced a blocking violation.
    FailFast,
}

/// Per-call behavior of one pipeline invocation.
///
/// Constructed fresh per call and never shared mutably; the default is the
/// safest mode: collect everything, return a value (never raise), run
/// sequentially, bypass nothing.
#[derive(Clone, Debug, Default)]
pub struct ExecutionOptions {
    pub strategy: CompletionStrategy,

    /// When true, an unsuccessful run surfaces as
    /// [`PipelineError::Failed`](crate::PipelineError::Failed) instead of a
    /// returned report.
    pub fail_on_error: bool,

    /// Evaluate the members of a same-order tier concurrently. Tiers are
    /// still strictly ordered with respect to each other.
    pub parallelize_tiers: bool,

    /// Upper bound on in-flight evaluations within a tier. `None` means the
    /// number of available processing units. Only meaningful together with
    /// `parallelize_tiers`.
    pub max_concurrency: Option<NonZeroUsize>,

    /// Policy names to skip for this call only, without touching their
    /// registration.
    pub bypass: BTreeSet<String>,
}

impl ExecutionOptions {
    pub fn fail_fast(mut self) -> Self {
        self.strategy = CompletionStrategy::FailFast;
        self
    }

    pub fn fail_on_error(mut self) -> Self {
        self.fail_on_error = true;
        self
    }

    pub fn parallel(mut self) -> Self {
        self.parallelize_tiers = true;
        self
    }

    pub fn max_concurrency(mut self, limit: NonZeroUsize) -> Self {
        self.max_concurrency = Some(limit);
        self
    }

    pub fn bypass(mut self, policy_name: impl Into<String>) -> Self {
        self.bypass.insert(policy_name.into());
        self
    }

    /// The concurrency bound actually applied to a parallel tier.
    pub(crate) fn effective_concurrency(&self) -> usize {
        match self.max_concurrency {
            Some(limit) => limit.get(),
            None => std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        }
    }
}
