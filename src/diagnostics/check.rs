//! Diagnostic trait and result types

use std::time::Duration;

use colored::Colorize;

/// Outcome of a single diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// Usable, but something looks off
    Warn,
    Fail,
}

impl Verdict {
    /// Pass or Warn
    pub fn is_ok(self) -> bool {
        !self.is_fail()
    }

    pub fn is_fail(self) -> bool {
        self == Verdict::Fail
    }

    /// Short coloured label for terminal output
    pub fn label(self) -> String {
        match self {
            Verdict::Pass => "PASS".green().to_string(),
            Verdict::Warn => "WARN".yellow().to_string(),
            Verdict::Fail => "FAIL".red().to_string(),
        }
    }
}

/// What a diagnostic found
#[derive(Debug, Clone)]
pub struct Finding {
    pub verdict: Verdict,
    pub summary: String,
    /// One line per observation
    pub notes: Vec<String>,
    /// Filled in by the runner
    pub elapsed: Duration,
}

impl Finding {
    fn new(verdict: Verdict, summary: impl Into<String>) -> Self {
        Self {
            verdict,
            summary: summary.into(),
            notes: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn pass(summary: impl Into<String>) -> Self {
        Self::new(Verdict::Pass, summary)
    }

    pub fn warn(summary: impl Into<String>) -> Self {
        Self::new(Verdict::Warn, summary)
    }

    pub fn fail(summary: impl Into<String>) -> Self {
        Self::new(Verdict::Fail, summary)
    }

    /// Attaches observation lines
    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }
}

/// A self-contained startup check
pub trait Diagnostic {
    /// Subsystem under test
    fn name(&self) -> &'static str;

    fn run(&self) -> Finding;
}
