//! Error handling and failure statistics.
//!
//! This module provides:
//! - Error type definitions for initialization, backend calls and submissions
//! - Categorization of backend failures for the diagnostic log
//! - Per-session failure counters
//!
//! Categories never reach the user. Whatever went wrong, the user sees the one
//! fixed failure message from [`crate::config::ANALYSIS_FAILED_MESSAGE`].

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_backend_error, categorize_reqwest_error};
pub use stats::FailureStats;
pub use types::{BackendError, ErrorType, InitializationError, SubmitError};
