use async_trait::async_trait;
use policygate_types::{PolicyOutcome, ids};
use tokio_util::sync::CancellationToken;

/// How a policy evaluation can fail.
///
/// `Faulted` is always contained by the pipeline and converted into a
/// synthetic `POLICY_EXCEPTION` outcome. `Cancelled` is the one exempt
/// category: it propagates and aborts the rest of the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// The evaluation observed the caller's cancellation signal.
    #[error("policy evaluation cancelled")]
    Cancelled,

    /// Any other evaluation failure.
    #[error(transparent)]
    Faulted(#[from] anyhow::Error),
}

/// One independent business-invariant check against a context.
///
/// Implementations are constructed once at wiring time (possibly by a
/// factory holding configuration) and reused across many pipeline runs, so
/// they must be safely callable repeatedly and hold no required mutable
/// state. Evaluation may suspend on I/O; implementations are expected to
/// honor `cancel` at their suspension points and surface it as
/// [`PolicyError::Cancelled`], never as an ordinary fault.
///
/// Policies sharing one `order` value form a tier and may run concurrently
/// when the caller opts in; the engine assumes they are independent and
/// side-effect-free and provides no locking.
#[async_trait]
pub trait Policy<C>: Send + Sync {
    /// Stable identifier, used for bypassing and audit.
    fn name(&self) -> &str;

    /// Execution rank; lower runs first, ties form a tier. See the
    /// `ORDER_*` constants in `policygate_types::ids` for the recommended
    /// numbering scheme.
    fn order(&self) -> i32 {
        ids::ORDER_DEFAULT
    }

    /// Whether this policy applies at all. Re-evaluated on every pipeline
    /// call, so it may read feature flags or other dynamic configuration.
    fn enabled(&self) -> bool {
        true
    }

    async fn evaluate(
        &self,
        context: &C,
        cancel: &CancellationToken,
    ) -> Result<PolicyOutcome, PolicyError>;
}
