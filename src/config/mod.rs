//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoint paths, defaults, user-facing messages)
//! - Library configuration types
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{Cli, Command};
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, OutputFormat};
