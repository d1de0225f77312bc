//! Tests for weighted scoring and tiers

use pycomply::core::models::{ComplianceReport, SourceKind, Status, Tier, Verdict};

fn report(verdicts: Vec<Verdict>) -> ComplianceReport {
    let mut report = ComplianceReport::new("acme/widget", "acme/widget", SourceKind::Remote);
    for verdict in verdicts {
        report.add_check(verdict);
    }
    report
}

fn assert_score(report: &ComplianceReport, expected: f64) {
    let score = report.calculate_score();
    assert!((score - expected).abs() < 1e-9, "score {score}, expected {expected}");
}

#[test]
fn weights_scale_contribution() {
    let report = report(vec![
        Verdict::pass("python-version", "Configuration", "ok").with_weight(10),
        Verdict::fail("readme", "Documentation", "missing").with_weight(5),
        Verdict::warn("linter", "Code Quality", "partial").with_weight(5),
    ]);
    // (10 + 2.5) / 20
    assert_score(&report, 62.5);
    assert_eq!(report.tier(), Tier::Fair);
    assert!(!report.meets_standard());
    assert_eq!(report.passed_checks(), 1);
    assert_eq!(report.warning_checks(), 1);
    assert_eq!(report.failed_checks(), 1);
    assert_eq!(report.total_checks(), 3);
}

#[test]
fn only_informational_verdicts_score_zero() {
    let report = report(vec![
        Verdict::not_applicable("claude-md", "Documentation", "absent"),
        Verdict::not_applicable("container-build", "Infrastructure", "No Dockerfile"),
    ]);
    assert_score(&report, 0.0);
    assert_eq!(report.total_checks(), 0);
    assert_eq!(report.tier(), Tier::NeedsWork);
}

#[test]
fn passing_bar_is_inclusive() {
    let report = report(vec![
        Verdict::pass("a", "Configuration", "ok").with_weight(3),
        Verdict::fail("b", "Configuration", "no").with_weight(1),
    ]);
    assert_score(&report, 75.0);
    assert!(report.meets_standard());
    assert_eq!(report.tier(), Tier::Good);
}

#[test]
fn degraded_checks_count_as_warnings() {
    let report = report(vec![
        Verdict::pass("a", "Configuration", "ok").with_weight(2),
        Verdict::could_not_verify("b", "Configuration", "timed out").with_weight(2),
    ]);
    assert_eq!(report.verdicts()[1].status(), Status::Warn);
    assert_score(&report, 75.0);
}

#[test]
fn score_is_stable_across_calls() {
    let report = report(vec![
        Verdict::pass("a", "Configuration", "ok").with_weight(7),
        Verdict::warn("b", "Configuration", "meh").with_weight(3),
    ]);
    assert_eq!(report.calculate_score().to_bits(), report.calculate_score().to_bits());
    assert!(report.get_summary().starts_with("EXCELLENT: "));
}

#[test]
fn tier_and_exit_follow_displayed_score() {
    // 1874 / 2500 = 74.96%, displayed as 75.0%
    let rounded_up = report(vec![
        Verdict::pass("a", "Configuration", "ok").with_weight(1874),
        Verdict::fail("b", "Configuration", "no").with_weight(626),
    ]);
    assert!(rounded_up.calculate_score() < 75.0);
    assert!((rounded_up.rounded_score() - 75.0).abs() < f64::EPSILON);
    assert_eq!(rounded_up.tier(), Tier::Good);
    assert!(rounded_up.meets_standard());

    // 1873 / 2500 = 74.92%, displayed as 74.9%
    let rounded_down = report(vec![
        Verdict::pass("a", "Configuration", "ok").with_weight(1873),
        Verdict::fail("b", "Configuration", "no").with_weight(627),
    ]);
    assert!((rounded_down.rounded_score() - 74.9).abs() < 1e-9);
    assert_eq!(rounded_down.tier(), Tier::Fair);
    assert!(!rounded_down.meets_standard());
}
