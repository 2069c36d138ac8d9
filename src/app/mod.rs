//! Main application modules.
//!
//! This module provides URL normalization and the request coordinator that
//! owns the session's UI state.

pub mod coordinator;
pub mod url;

// Re-export public API
pub use coordinator::{RequestCoordinator, UiState};
pub use url::normalize_url;
