//! Host system information

use sysinfo::System;

use crate::diagnostics::check::{Diagnostic, Finding};

/// Gathers OS, CPU and memory details
pub struct SystemInfoCheck;

impl Diagnostic for SystemInfoCheck {
    fn name(&self) -> &'static str {
        "System Info"
    }

    fn run(&self) -> Finding {
        let mut sys = System::new();
        sys.refresh_cpu_all();
        sys.refresh_memory();

        let unknown = || "Unknown".to_string();
        let mut notes = vec![
            format!(
                "OS: {} {}",
                System::name().unwrap_or_else(unknown),
                System::os_version().unwrap_or_else(unknown)
            ),
            format!("Kernel: {}", System::kernel_version().unwrap_or_else(unknown)),
        ];

        let logical_cores = sys.cpus().len();
        if logical_cores == 0 {
            return Finding::warn("Unable to detect CPU cores").with_notes(notes);
        }
        notes.push(format!("CPU cores: {} logical", logical_cores));

        let total_memory_gb = sys.total_memory() as f64 / 1_073_741_824.0;
        notes.push(format!("Memory: {:.1} GB total", total_memory_gb));

        Finding::pass("System info gathered").with_notes(notes)
    }
}
