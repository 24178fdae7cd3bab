//! Configuration loading

use crate::app::AppConfig;
use crate::diagnostics::check::{Diagnostic, Finding};

/// Loads each shipped profile and the environment-selected one
pub struct ConfigCheck {
    profiles: Vec<&'static str>,
}

impl ConfigCheck {
    pub fn new() -> Self {
        Self::with_profiles(vec!["debug", "release"])
    }

    pub fn with_profiles(profiles: Vec<&'static str>) -> Self {
        Self { profiles }
    }
}

impl Default for ConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagnostic for ConfigCheck {
    fn name(&self) -> &'static str {
        "Configuration"
    }

    fn run(&self) -> Finding {
        let mut notes = Vec::new();
        let mut failed = 0;

        for profile in &self.profiles {
            match AppConfig::load(profile) {
                Ok(config) => notes.push(format!(
                    "✓ '{}': {}x{} at {} fps ({:?})",
                    profile,
                    config.window.width,
                    config.window.height,
                    config.frame.target_fps,
                    config.frame.pacing
                )),
                Err(e) => {
                    failed += 1;
                    notes.push(format!("✗ '{}': {}", profile, e));
                }
            }
        }

        let env_ok = match AppConfig::load_from_env() {
            Ok(config) => {
                notes.push(format!("✓ environment selects '{}'", config.profile));
                true
            }
            Err(e) => {
                notes.push(format!("⚠ environment: {}", e));
                false
            }
        };

        if failed > 0 {
            Finding::fail(format!("{} profile(s) failed to load", failed)).with_notes(notes)
        } else if !env_ok {
            Finding::warn("Environment overrides are invalid").with_notes(notes)
        } else {
            Finding::pass(format!("{} profiles validated", self.profiles.len())).with_notes(notes)
        }
    }
}
