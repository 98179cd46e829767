use crate::error::PipelineError;
use crate::options::{CompletionStrategy, ExecutionOptions};
use crate::policy::{Policy, PolicyError};
use crate::report::PipelineReport;
use futures::FutureExt;
use futures::stream::{self, StreamExt, TryStreamExt};
use policygate_types::{PolicyOutcome, Violation, ids};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Registration-time assembly of a [`PolicyPipeline`].
///
/// Append policy instances (or `Arc`s produced by factories) in any order;
/// `build` establishes the fixed execution plan by sorting ascending by
/// `order` once. The stable sort preserves registration order within a tier.
pub struct PipelineBuilder<C> {
    policies: Vec<Arc<dyn Policy<C>>>,
}

impl<C> PipelineBuilder<C> {
    pub fn new() -> Self {
        Self {
            policies: Vec::new(),
        }
    }

    pub fn policy<P: Policy<C> + 'static>(mut self, policy: P) -> Self {
        self.policies.push(Arc::new(policy));
        self
    }

    /// Register an already-shared policy instance.
    pub fn policy_arc(mut self, policy: Arc<dyn Policy<C>>) -> Self {
        self.policies.push(policy);
        self
    }

    pub fn build(mut self) -> PolicyPipeline<C> {
        self.policies.sort_by_key(|p| p.order());
        PolicyPipeline {
            policies: self.policies,
        }
    }
}

impl<C> Default for PipelineBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Executes the policies registered for one context type.
///
/// Constructed once per context type and reused across calls; each `execute`
/// is independent and side-effect-free apart from whatever the policies
/// themselves do.
pub struct PolicyPipeline<C> {
    /// Sorted ascending by order at build time; immutable afterwards.
    policies: Vec<Arc<dyn Policy<C>>>,
}

impl<C> PolicyPipeline<C> {
    pub fn builder() -> PipelineBuilder<C> {
        PipelineBuilder::new()
    }

    /// Number of registered policies, before per-call selection.
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl<C: Sync> PolicyPipeline<C> {
    /// Run with default options and no cancellation signal.
    pub async fn execute_default(&self, context: &C) -> Result<PipelineReport, PipelineError> {
        self.execute(context, &ExecutionOptions::default()).await
    }

    /// Run with the given options and no cancellation signal.
    pub async fn execute(
        &self,
        context: &C,
        options: &ExecutionOptions,
    ) -> Result<PipelineReport, PipelineError> {
        self.execute_cancellable(context, options, CancellationToken::new())
            .await
    }

    /// Run with the given options, honoring `cancel` at every evaluation.
    ///
    /// A caller wanting a deadline attaches it to `cancel` before invoking
    /// this; the engine imposes no timeout of its own.
    pub async fn execute_cancellable(
        &self,
        context: &C,
        options: &ExecutionOptions,
        cancel: CancellationToken,
    ) -> Result<PipelineReport, PipelineError> {
        // Selection: enablement is re-checked on every call because it may
        // be dynamic; bypass is per-call by name. Sorted order is preserved.
        let selected: Vec<&dyn Policy<C>> = self
            .policies
            .iter()
            .map(|p| p.as_ref())
            .filter(|p| p.enabled() && !options.bypass.contains(p.name()))
            .collect();

        debug!(
            context = std::any::type_name::<C>(),
            registered = self.policies.len(),
            selected = selected.len(),
            parallel = options.parallelize_tiers,
            "executing policy pipeline"
        );

        let mut outcomes: Vec<PolicyOutcome> = Vec::with_capacity(selected.len());

        // A tier is a maximal run of consecutive same-order policies.
        for tier in selected.chunk_by(|a, b| a.order() == b.order()) {
            debug!(order = tier[0].order(), size = tier.len(), "evaluating tier");

            let tier_outcomes = if options.parallelize_tiers && tier.len() > 1 {
                self.run_tier_parallel(tier, context, options, &cancel)
                    .await?
            } else {
                self.run_tier_sequential(tier, context, &cancel).await?
            };

            let tier_blocked = tier_outcomes.iter().any(|o| !o.succeeded());
            outcomes.extend(tier_outcomes);

            // Early termination is tier-granular in both execution modes, so
            // a FailFast run is always a tier-aligned prefix of CollectAll
            // and concurrency cannot change which outcomes exist.
            if options.strategy == CompletionStrategy::FailFast && tier_blocked {
                debug!("fail-fast: blocking violation produced, skipping remaining tiers");
                break;
            }
        }

        let report = PipelineReport::new(outcomes, std::any::type_name::<C>(), options.strategy);

        if options.fail_on_error && !report.is_success() {
            return Err(PipelineError::Failed {
                report: Box::new(report),
            });
        }
        Ok(report)
    }

    async fn run_tier_sequential(
        &self,
        tier: &[&dyn Policy<C>],
        context: &C,
        cancel: &CancellationToken,
    ) -> Result<Vec<PolicyOutcome>, PipelineError> {
        let mut outcomes = Vec::with_capacity(tier.len());
        for policy in tier {
            outcomes.push(self.evaluate_one(*policy, context, cancel).await?);
        }
        Ok(outcomes)
    }

    /// Evaluate a whole tier concurrently, bounded by the options'
    /// concurrency limit. `buffered` yields results in submission order, so
    /// the outcome list reflects policy order rather than completion order.
    async fn run_tier_parallel(
        &self,
        tier: &[&dyn Policy<C>],
        context: &C,
        options: &ExecutionOptions,
        cancel: &CancellationToken,
    ) -> Result<Vec<PolicyOutcome>, PipelineError> {
        let limit = options.effective_concurrency();
        stream::iter(
            tier.iter()
                .map(|policy| self.evaluate_one(*policy, context, cancel)),
        )
        .buffered(limit)
        .try_collect()
        .await
    }

    /// Run one evaluation under the resilience boundary: ordinary faults and
    /// panics are contained as synthetic outcomes, cancellation propagates.
    async fn evaluate_one(
        &self,
        policy: &dyn Policy<C>,
        context: &C,
        cancel: &CancellationToken,
    ) -> Result<PolicyOutcome, PipelineError> {
        if cancel.is_cancelled() {
            return Err(PipelineError::Cancelled);
        }

        let evaluation = AssertUnwindSafe(policy.evaluate(context, cancel)).catch_unwind();
        match evaluation.await {
            Ok(Ok(outcome)) => Ok(outcome),
            Ok(Err(PolicyError::Cancelled)) => {
                debug!(policy = policy.name(), "evaluation observed cancellation");
                Err(PipelineError::Cancelled)
            }
            Ok(Err(PolicyError::Faulted(err))) => {
                warn!(policy = policy.name(), error = %err, "policy evaluation faulted; contained");
                Ok(faulted_outcome(policy.name(), policy.order(), &err))
            }
            Err(payload) => {
                let text = panic_text(payload.as_ref());
                warn!(policy = policy.name(), panic = %text, "policy evaluation panicked; contained");
                Ok(panicked_outcome(policy.name(), policy.order(), &text))
            }
        }
    }
}

fn faulted_outcome(name: &str, order: i32, err: &anyhow::Error) -> PolicyOutcome {
    let violation = Violation::critical(
        ids::CODE_POLICY_EXCEPTION,
        format!("policy '{name}' failed to evaluate: {err}"),
    )
    .with_meta(ids::META_ERROR, err.to_string())
    .with_meta(ids::META_ERROR_CHAIN, format!("{err:#}"))
    .with_meta(ids::META_POLICY_ORDER, order);
    PolicyOutcome::fail(name, violation)
}

fn panicked_outcome(name: &str, order: i32, text: &str) -> PolicyOutcome {
    let violation = Violation::critical(
        ids::CODE_POLICY_EXCEPTION,
        format!("policy '{name}' panicked during evaluation: {text}"),
    )
    .with_meta(ids::META_ERROR, text)
    .with_meta(ids::META_POLICY_ORDER, order);
    PolicyOutcome::fail(name, violation)
}

fn panic_text(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
