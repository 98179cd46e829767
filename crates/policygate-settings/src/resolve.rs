use crate::model::PolicygateConfigV1;
use anyhow::Context;
use policygate_engine::{CompletionStrategy, ExecutionOptions};
use std::num::NonZeroUsize;

/// Call-site overrides that win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub strategy: Option<CompletionStrategy>,
    pub fail_on_error: Option<bool>,
    pub parallelize_tiers: Option<bool>,
}

pub fn resolve_options(
    cfg: PolicygateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ExecutionOptions> {
    let mut options = ExecutionOptions::default();

    if let Some(strategy_s) = cfg.strategy.as_deref() {
        options.strategy = parse_strategy(strategy_s)?;
    }
    if let Some(strategy) = overrides.strategy {
        options.strategy = strategy;
    }

    options.fail_on_error = overrides
        .fail_on_error
        .or(cfg.fail_on_error)
        .unwrap_or(false);
    options.parallelize_tiers = overrides
        .parallelize_tiers
        .or(cfg.parallelize_tiers)
        .unwrap_or(false);

    if let Some(limit) = cfg.max_concurrency {
        let limit = NonZeroUsize::new(limit as usize)
            .context("max_concurrency must be at least 1 (omit it to use all processing units)")?;
        options.max_concurrency = Some(limit);
    }

    options.bypass.extend(cfg.bypass);

    // A policy disabled from config folds into the bypass set: the engine
    // skips it by name, registration untouched.
    for (policy_name, pc) in cfg.policies {
        if pc.enabled == Some(false) {
            options.bypass.insert(policy_name);
        }
    }

    Ok(options)
}

fn parse_strategy(v: &str) -> anyhow::Result<CompletionStrategy> {
    match v {
        "collect-all" => Ok(CompletionStrategy::CollectAll),
        "fail-fast" => Ok(CompletionStrategy::FailFast),
        other => anyhow::bail!("unknown strategy: {other} (expected 'collect-all' or 'fail-fast')"),
    }
}
