//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_mailcheck` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit codes
//!
//! Results go to stdout (or `--output`); everything else goes to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_mailcheck::config::EXIT_INTERRUPTED;
use domain_mailcheck::initialization::init_logger_with;
use domain_mailcheck::{run_check, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables (e.g. RUST_LOG) from .env if present
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_check(config).await {
        Ok(report) if report.interrupted => {
            eprintln!(
                "domain_mailcheck interrupted after {} domain{}",
                report.total_domains,
                if report.total_domains == 1 { "" } else { "s" }
            );
            process::exit(EXIT_INTERRUPTED);
        }
        Ok(report) => {
            log::info!(
                "Done: {} domain{} in {:.1}s",
                report.total_domains,
                if report.total_domains == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_mailcheck error: {:#}", e);
            process::exit(1);
        }
    }
}
