use super::*;
use crate::context::{EntryLine, LedgerPosting, PeriodState};
use crate::ids;
use policygate_engine::{CancellationToken, Policy};
use policygate_types::Severity;

fn line(account: &str, debit_minor: i64, credit_minor: i64) -> EntryLine {
    EntryLine {
        account: account.to_string(),
        debit_minor,
        credit_minor,
    }
}

fn posting(period: PeriodState, lines: Vec<EntryLine>) -> LedgerPosting {
    LedgerPosting {
        document: "DOC-2026-001".to_string(),
        period,
        lines,
    }
}

#[tokio::test]
async fn closed_period_is_a_hard_failure() {
    let ctx = posting(PeriodState::Closed, vec![line("1000", 500, 0)]);
    let outcome = OpenPeriod
        .evaluate(&ctx, &CancellationToken::new())
        .await
        .unwrap();

    assert!(!outcome.succeeded());
    let v = &outcome.violations()[0];
    assert_eq!(v.code, ids::CODE_PERIOD_CLOSED);
    assert_eq!(v.field.as_deref(), Some("period"));
}

#[tokio::test]
async fn open_period_passes() {
    let ctx = posting(PeriodState::Open, vec![line("1000", 500, 0)]);
    let outcome = OpenPeriod
        .evaluate(&ctx, &CancellationToken::new())
        .await
        .unwrap();
    assert!(outcome.succeeded());
}

#[tokio::test]
async fn unbalanced_posting_reports_both_totals() {
    let ctx = posting(
        PeriodState::Open,
        vec![line("1000", 1200, 0), line("4000", 0, 1100)],
    );
    let outcome = BalancedPosting
        .evaluate(&ctx, &CancellationToken::new())
        .await
        .unwrap();

    assert!(!outcome.succeeded());
    let v = &outcome.violations()[0];
    assert_eq!(v.code, ids::CODE_UNBALANCED_POSTING);
    assert_eq!(v.metadata["total_debit_minor"], 1200);
    assert_eq!(v.metadata["total_credit_minor"], 1100);
}

#[tokio::test]
async fn balanced_posting_passes() {
    let ctx = posting(
        PeriodState::Open,
        vec![line("1000", 1200, 0), line("4000", 0, 1200)],
    );
    let outcome = BalancedPosting
        .evaluate(&ctx, &CancellationToken::new())
        .await
        .unwrap();
    assert!(outcome.succeeded());
}

#[tokio::test]
async fn amount_above_threshold_is_advisory_only() {
    let ctx = posting(
        PeriodState::Open,
        vec![line("1000", 250_000, 0), line("4000", 0, 250_000)],
    );
    let outcome = LargeAmount::new(100_000)
        .evaluate(&ctx, &CancellationToken::new())
        .await
        .unwrap();

    // A warning is recorded but the outcome still counts as succeeded.
    assert!(outcome.succeeded());
    let v = &outcome.violations()[0];
    assert_eq!(v.code, ids::CODE_LARGE_AMOUNT);
    assert_eq!(v.severity, Severity::Warning);
    assert_eq!(v.metadata["threshold_minor"], 100_000);
}

#[tokio::test]
async fn amount_at_threshold_stays_silent() {
    let ctx = posting(
        PeriodState::Open,
        vec![line("1000", 100_000, 0), line("4000", 0, 100_000)],
    );
    let outcome = LargeAmount::new(100_000)
        .evaluate(&ctx, &CancellationToken::new())
        .await
        .unwrap();
    assert!(outcome.succeeded());
    assert!(outcome.violations().is_empty());
}
