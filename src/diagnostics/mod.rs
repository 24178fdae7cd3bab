//! Startup self-check
//!
//! Runs a fixed set of diagnostics against configuration, simulation, frame
//! pacing, build metadata, the host system and the graphics adapter, and
//! reports the results as a table. Used by `--check` and the integration
//! tests.
//!
//! ```no_run
//! use paddle_bounce::diagnostics::{self, DiagnosticRunner, checks::*};
//!
//! let report = DiagnosticRunner::new()
//!     .with(ConfigCheck::new())
//!     .with(SimulationCheck)
//!     .run();
//! diagnostics::print_report(&report);
//! ```

pub mod check;
pub mod checks;
pub mod report;
pub mod runner;

pub use check::{Diagnostic, Finding, Verdict};
pub use report::{format_report, print_report};
pub use runner::{DiagnosticReport, DiagnosticRunner};

/// Every diagnostic that runs without a window
pub fn headless() -> DiagnosticRunner {
    DiagnosticRunner::new()
        .with(checks::ConfigCheck::new())
        .with(checks::SimulationCheck)
        .with(checks::PacingCheck::default())
        .with(checks::BuildInfoCheck)
        .with(checks::SystemInfoCheck)
}

/// Runs every diagnostic, including the graphics adapter probe
pub fn run_all() -> DiagnosticReport {
    headless().with(checks::GraphicsCheck).run()
}
