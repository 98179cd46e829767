use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `policygate.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so
/// forward-compat is easy. Validation happens during resolution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicygateConfigV1 {
    /// Optional schema string for tooling (`policygate.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Completion strategy: `collect-all` (default) or `fail-fast`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,

    /// Raise instead of returning a failed report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on_error: Option<bool>,

    /// Evaluate same-order tiers concurrently.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallelize_tiers: Option<bool>,

    /// Upper bound on in-flight evaluations within a tier; omitted means the
    /// available processing units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<u32>,

    /// Policy names skipped on every run configured from this file.
    #[serde(default)]
    pub bypass: Vec<String>,

    /// Map of policy name -> per-policy config.
    #[serde(default)]
    pub policies: BTreeMap<String, PolicyConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyConfig {
    /// Disable a policy from config without touching its registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
