//! Build metadata

use crate::build_info;
use crate::diagnostics::check::{Diagnostic, Finding};

pub struct BuildInfoCheck;

impl Diagnostic for BuildInfoCheck {
    fn name(&self) -> &'static str {
        "Build Info"
    }

    fn run(&self) -> Finding {
        let notes = build_info::detailed_info()
            .lines()
            .map(str::to_string)
            .collect();
        Finding::pass(build_info::version_string()).with_notes(notes)
    }
}
