//! Command-line interface definition.

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};

use crate::config::constants::{BACKEND_URL_ENV, DEFAULT_BACKEND_URL, DEFAULT_USER_AGENT};
use crate::config::types::{Config, LogFormat, LogLevel, OutputFormat};

/// Detect suspicious websites before you trust them.
#[derive(Debug, Parser)]
#[command(name = "site_guard", version, about)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the analysis backend
    #[arg(long, global = true, env = BACKEND_URL_ENV, default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    /// Log level
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Report format written to stdout
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Give up on the backend after this many seconds (waits forever when unset)
    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Print the backend's reasons under the breakdown
    #[arg(long, global = true)]
    pub show_reasons: bool,
}

/// What the session does once configured.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Analyze a single website URL
    Analyze {
        /// Website URL, e.g. example.com or https://example.com
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        url: String,
    },
    /// Read URLs from stdin, one analysis per line
    Interactive,
    /// Check that the analysis backend is up
    Health,
}

impl Cli {
    /// Splits parsed arguments into library configuration and the command to run.
    pub fn into_parts(self) -> (Config, Command) {
        let config = Config {
            backend_url: self.backend_url,
            log_level: self.log_level,
            log_format: self.log_format,
            output: self.output,
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent,
            show_reasons: self.show_reasons,
        };
        (config, self.command)
    }
}
