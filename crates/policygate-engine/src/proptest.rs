//! Property-based tests for the pipeline engine.
//!
//! These verify the invariants the engine promises independent of any
//! particular policy set:
//! - outcome order equals ascending policy order with stable ties
//! - FailFast produces a tier-aligned prefix of CollectAll
//! - parallel execution is observationally equivalent to sequential

use crate::options::{CompletionStrategy, ExecutionOptions};
use crate::report::PipelineReport;
use crate::test_support::TestPolicy;
use crate::{PipelineBuilder, PolicyPipeline};
use policygate_types::{Severity, Violation};
use proptest::prelude::*;
use std::num::NonZeroUsize;

#[derive(Clone, Debug)]
enum Action {
    Pass,
    Violate(Severity),
    Fault,
}

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Info),
        Just(Severity::Warning),
        Just(Severity::Error),
        Just(Severity::Critical),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => Just(Action::Pass),
        2 => arb_severity().prop_map(Action::Violate),
        1 => Just(Action::Fault),
    ]
}

/// Policies with orders drawn from a small range so ties (tiers) are common.
fn arb_policy_set() -> impl Strategy<Value = Vec<(i32, Action)>> {
    prop::collection::vec((0i32..5, arb_action()), 0..12)
}

fn pipeline_from(actions: &[(i32, Action)]) -> PolicyPipeline<()> {
    let mut builder = PipelineBuilder::new();
    for (i, (order, action)) in actions.iter().enumerate() {
        let name = format!("p{i}");
        builder = match action {
            Action::Pass => builder.policy(TestPolicy::pass(&name, *order)),
            Action::Violate(severity) => builder.policy(TestPolicy::violate(
                &name,
                *order,
                Violation::new("V-001", *severity, "generated violation"),
            )),
            Action::Fault => builder.policy(TestPolicy::fault(&name, *order, "generated fault")),
        };
    }
    builder.build()
}

fn run(pipeline: &PolicyPipeline<()>, options: &ExecutionOptions) -> PipelineReport {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("build runtime")
        .block_on(pipeline.execute(&(), options))
        .expect("pipeline never fails without fail_on_error")
}

/// Registration index encoded in the generated policy name.
fn index_of(name: &str) -> usize {
    name.trim_start_matches('p').parse().expect("test policy name")
}

proptest! {
    /// Outcome order equals ascending policy order; ties keep registration
    /// order. Holds in both execution modes.
    #[test]
    fn outcome_order_is_ascending_with_stable_ties(actions in arb_policy_set()) {
        let pipeline = pipeline_from(&actions);

        for options in [
            ExecutionOptions::default(),
            ExecutionOptions::default().parallel(),
        ] {
            let report = run(&pipeline, &options);
            prop_assert_eq!(report.evaluated_count(), actions.len());

            let mut prev: Option<(i32, usize)> = None;
            for outcome in report.outcomes() {
                let idx = index_of(outcome.policy_name());
                let order = actions[idx].0;
                if let Some((prev_order, prev_idx)) = prev {
                    prop_assert!(order >= prev_order, "order must be non-decreasing");
                    if order == prev_order {
                        prop_assert!(idx > prev_idx, "ties must keep registration order");
                    }
                }
                prev = Some((order, idx));
            }
        }
    }

    /// succeeded <=> no blocking violation, for every outcome; and the
    /// aggregate success flag tracks the blocking view exactly.
    #[test]
    fn severity_invariant_holds_everywhere(actions in arb_policy_set()) {
        let pipeline = pipeline_from(&actions);
        let report = run(&pipeline, &ExecutionOptions::default());

        for outcome in report.outcomes() {
            let has_blocking = outcome.violations().iter().any(|v| v.is_blocking());
            prop_assert_eq!(outcome.succeeded(), !has_blocking);
        }
        prop_assert_eq!(report.is_success(), report.blocking_violations().count() == 0);
        prop_assert_eq!(
            report.failed_count(),
            report.outcomes().iter().filter(|o| !o.succeeded()).count()
        );
    }

    /// The FailFast outcome list is a tier-aligned prefix of CollectAll.
    #[test]
    fn fail_fast_is_tier_aligned_prefix_of_collect_all(actions in arb_policy_set()) {
        let pipeline = pipeline_from(&actions);

        let complete = run(&pipeline, &ExecutionOptions::default());
        let fast = run(&pipeline, &ExecutionOptions::default().fail_fast());

        prop_assert!(fast.evaluated_count() <= complete.evaluated_count());
        for (a, b) in fast.outcomes().iter().zip(complete.outcomes()) {
            prop_assert_eq!(a.policy_name(), b.policy_name());
            prop_assert_eq!(a.succeeded(), b.succeeded());
        }

        // Tier alignment: the prefix never splits a tier.
        if fast.evaluated_count() < complete.evaluated_count() {
            let last_included = fast.outcomes().last().expect("non-empty prefix");
            let first_excluded = &complete.outcomes()[fast.evaluated_count()];
            let order_of = |name: &str| actions[index_of(name)].0;
            prop_assert!(
                order_of(first_excluded.policy_name()) > order_of(last_included.policy_name()),
                "fail-fast cut must fall on a tier boundary"
            );
        }
        prop_assert_eq!(fast.strategy(), CompletionStrategy::FailFast);
    }

    /// Parallel execution at any small concurrency bound produces the same
    /// observable result as sequential execution.
    #[test]
    fn parallel_matches_sequential(actions in arb_policy_set(), limit in 1usize..4) {
        let pipeline = pipeline_from(&actions);

        let sequential = run(&pipeline, &ExecutionOptions::default());
        let options = ExecutionOptions::default()
            .parallel()
            .max_concurrency(NonZeroUsize::new(limit).unwrap());
        let parallel = run(&pipeline, &options);

        prop_assert_eq!(parallel.is_success(), sequential.is_success());
        prop_assert_eq!(parallel.evaluated_count(), sequential.evaluated_count());

        let codes = |r: &PipelineReport| {
            let mut v: Vec<String> = r.all_violations().map(|v| v.code.clone()).collect();
            v.sort();
            v
        };
        prop_assert_eq!(codes(&parallel), codes(&sequential));
    }
}
