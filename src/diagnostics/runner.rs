//! Runs diagnostics and tallies the results

use std::time::Instant;

use tracing::debug;

use super::check::{Diagnostic, Finding, Verdict};

/// Collected findings, in the order the diagnostics ran
#[derive(Debug, Default)]
pub struct DiagnosticReport {
    pub findings: Vec<(&'static str, Finding)>,
}

impl DiagnosticReport {
    fn count(&self, verdict: Verdict) -> usize {
        self.findings
            .iter()
            .filter(|(_, finding)| finding.verdict == verdict)
            .count()
    }

    pub fn total(&self) -> usize {
        self.findings.len()
    }

    pub fn passed(&self) -> usize {
        self.count(Verdict::Pass)
    }

    pub fn warned(&self) -> usize {
        self.count(Verdict::Warn)
    }

    pub fn failed(&self) -> usize {
        self.count(Verdict::Fail)
    }

    /// No failures (warnings allowed)
    pub fn is_healthy(&self) -> bool {
        self.failed() == 0
    }

    /// 0 = all pass, 1 = any fail, 2 = warnings only
    pub fn exit_code(&self) -> i32 {
        if self.failed() > 0 {
            1
        } else if self.warned() > 0 {
            2
        } else {
            0
        }
    }
}

/// Builder that runs diagnostics in registration order
#[derive(Default)]
pub struct DiagnosticRunner {
    diagnostics: Vec<Box<dyn Diagnostic>>,
}

impl DiagnosticRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<D: Diagnostic + 'static>(mut self, diagnostic: D) -> Self {
        self.diagnostics.push(Box::new(diagnostic));
        self
    }

    pub fn run(self) -> DiagnosticReport {
        let findings = self
            .diagnostics
            .into_iter()
            .map(|diagnostic| {
                let started = Instant::now();
                let mut finding = diagnostic.run();
                finding.elapsed = started.elapsed();
                debug!(
                    diagnostic = diagnostic.name(),
                    verdict = ?finding.verdict,
                    elapsed = ?finding.elapsed,
                    "diagnostic finished"
                );
                (diagnostic.name(), finding)
            })
            .collect();

        DiagnosticReport { findings }
    }
}
