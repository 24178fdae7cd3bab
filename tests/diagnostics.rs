//! Integration tests for the startup self-check

use paddle_bounce::diagnostics::{self, Diagnostic, DiagnosticRunner, checks::*};

#[test]
fn test_headless_diagnostics_are_healthy() {
    let report = diagnostics::headless().run();

    if !report.is_healthy() {
        eprintln!("\n{}", diagnostics::format_report(&report));
    }

    assert!(
        report.is_healthy(),
        "Diagnostics failed: {} failures, {} warnings",
        report.failed(),
        report.warned()
    );
}

#[test]
fn test_simulation_check() {
    let finding = SimulationCheck.run();
    assert!(finding.verdict.is_ok(), "{:?}", finding.notes);
}

#[test]
fn test_pacing_check() {
    let finding = PacingCheck::new(5, 3).run();
    assert!(!finding.verdict.is_fail(), "{:?}", finding.notes);
}

#[test]
fn test_config_check() {
    let finding = ConfigCheck::new().run();
    assert!(finding.verdict.is_ok(), "{}", finding.summary);
}

#[test]
fn test_build_info_check() {
    let finding = BuildInfoCheck.run();
    assert!(finding.verdict.is_ok());
    assert!(!finding.notes.is_empty());
}

#[test]
fn test_graphics_check_never_fails() {
    // Headless CI has no adapter; that is a warning only
    let finding = GraphicsCheck.run();
    assert!(finding.verdict.is_ok(), "{}", finding.summary);
}

#[test]
fn test_runner_keeps_order() {
    let report = DiagnosticRunner::new()
        .with(SimulationCheck)
        .with(BuildInfoCheck)
        .run();

    let names: Vec<_> = report.findings.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, ["Simulation", "Build Info"]);
    assert_eq!(report.passed() + report.warned() + report.failed(), report.total());
}
