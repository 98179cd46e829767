//! Config parsing and execution-option resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration
//! provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{PolicyConfig, PolicygateConfigV1};
pub use resolve::Overrides;

/// Parse `policygate.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PolicygateConfigV1> {
    let cfg: PolicygateConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve [`policygate_engine::ExecutionOptions`] from a parsed config plus
/// call-site overrides (overrides win).
pub fn resolve_options(
    cfg: PolicygateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<policygate_engine::ExecutionOptions> {
    resolve::resolve_options(cfg, overrides)
}
