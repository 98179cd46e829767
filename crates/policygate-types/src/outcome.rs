use crate::violation::{Severity, Violation};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The result of evaluating one policy against one context.
///
/// Fields are private so the invariant cannot be broken from outside:
/// `succeeded` is true iff no contained violation is blocking. An outcome
/// carrying only advisory violations still counts as succeeded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyOutcome {
    policy_name: String,
    violations: Vec<Violation>,
    succeeded: bool,
}

impl PolicyOutcome {
    /// Build an outcome from whatever violations the policy detected,
    /// deriving the success flag. This is the only real constructor; the
    /// named variants below are conveniences over it.
    pub fn from_violations(policy_name: impl Into<String>, violations: Vec<Violation>) -> Self {
        let succeeded = !violations.iter().any(Violation::is_blocking);
        Self {
            policy_name: policy_name.into(),
            violations,
            succeeded,
        }
    }

    /// A clean pass: no violations at all.
    pub fn pass(policy_name: impl Into<String>) -> Self {
        Self::from_violations(policy_name, Vec::new())
    }

    /// Failure with a single violation.
    pub fn fail(policy_name: impl Into<String>, violation: Violation) -> Self {
        Self::from_violations(policy_name, vec![violation])
    }

    /// Failure (or pass, if all advisory) with multiple violations.
    pub fn fail_all(policy_name: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self::from_violations(policy_name, violations)
    }

    /// Advisory warning: succeeded, with a single Warning violation.
    pub fn warn(
        policy_name: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let name = policy_name.into();
        Self::from_violations(name, vec![Violation::warning(code, message)])
    }

    /// Advisory note: succeeded, with a single Info violation.
    pub fn note(
        policy_name: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let name = policy_name.into();
        Self::from_violations(name, vec![Violation::info(code, message)])
    }

    pub fn policy_name(&self) -> &str {
        &self.policy_name
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    /// Violations with severity >= Error.
    pub fn blocking_violations(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_blocking())
    }

    /// Violations with severity < Error.
    pub fn advisory_violations(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| !v.is_blocking())
    }

    /// The highest severity present, if any violation was recorded.
    pub fn max_severity(&self) -> Option<Severity> {
        self.violations.iter().map(|v| v.severity).max()
    }
}
