//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_guard` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use site_guard::initialization::init_logger_with;
use site_guard::{run, Cli, EXIT_SETUP_FAILED, EXIT_SUCCESS};

#[tokio::main]
async fn main() -> Result<()> {
    // .env may provide SITE_GUARD_BACKEND_URL; absence is fine
    let _ = dotenvy::dotenv();

    let (config, command) = Cli::parse().into_parts();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run(config, command).await {
        Ok(report) => {
            let code = report.exit_code();
            if code != EXIT_SUCCESS {
                process::exit(code);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("site_guard error: {:#}", e);
            process::exit(EXIT_SETUP_FAILED);
        }
    }
}
