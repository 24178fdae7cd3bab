//! Terminal formatting for diagnostic reports

use colored::Colorize;
use tabled::builder::Builder;
use tabled::settings::{Alignment, Style, object::Rows};

use super::runner::DiagnosticReport;

/// Renders the report as a table followed by a summary
pub fn format_report(report: &DiagnosticReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Subsystem", "Status", "Time", "Summary"]);

    for (name, finding) in &report.findings {
        builder.push_record([
            name.to_string(),
            finding.verdict.label(),
            format!("{:.2?}", finding.elapsed),
            finding.summary.clone(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .modify(Rows::first(), Alignment::center());

    let mut output = table.to_string();
    output.push('\n');

    output.push_str(&format!("\n{}\n", "Summary".bold().underline()));
    output.push_str(&format!(
        "  {} checks: {} passed, {} warned, {} failed\n",
        report.total(),
        report.passed(),
        report.warned(),
        report.failed()
    ));

    let overall = match (report.is_healthy(), report.warned() > 0) {
        (false, _) => "UNHEALTHY".red().bold(),
        (true, true) => "HEALTHY (with warnings)".yellow().bold(),
        (true, false) => "HEALTHY".green().bold(),
    };
    output.push_str(&format!("  Overall: {}\n", overall));

    output
}

/// Prints the report and every finding's notes to stdout
pub fn print_report(report: &DiagnosticReport) {
    println!("{}", format_report(report));

    for (name, finding) in &report.findings {
        if finding.notes.is_empty() {
            continue;
        }
        println!("{}:", name.bold());
        for note in &finding.notes {
            println!("  {}", note);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::check::Finding;

    #[test]
    fn test_report_lists_every_subsystem() {
        colored::control::set_override(false);
        let report = DiagnosticReport {
            findings: vec![
                ("Configuration", Finding::pass("loaded")),
                ("Graphics", Finding::warn("software adapter")),
            ],
        };

        let text = format_report(&report);
        assert!(text.contains("Configuration"));
        assert!(text.contains("software adapter"));
        assert!(text.contains("1 passed, 1 warned, 0 failed"));
        assert!(text.contains("HEALTHY (with warnings)"));
    }
}
