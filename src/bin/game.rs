use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use paddle_bounce::app::{self, AppConfig};
use paddle_bounce::{build_info, diagnostics};

/// Single-paddle bouncing-ball demo
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration profile (config/<profile>.toml); defaults to $APP_PROFILE or "release"
    #[arg(long)]
    profile: Option<String>,

    /// Run the startup self-check and exit with its status
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    info!(version = %build_info::version_string(), "paddle-bounce");

    if cli.check {
        let report = diagnostics::run_all();
        diagnostics::print_report(&report);
        return ExitCode::from(report.exit_code() as u8);
    }

    let loaded = match &cli.profile {
        Some(profile) => AppConfig::load(profile),
        None => AppConfig::load_from_env(),
    };
    let config = loaded.unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using default configuration");
        AppConfig::builtin(cli.profile.as_deref().unwrap_or("release"))
    });

    match app::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, details = ?e, "Game could not start");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
