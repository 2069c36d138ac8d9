//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for backend calls.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from config
/// - A request timeout, only when `timeout_seconds` is set
/// - Rustls TLS backend (no native TLS)
///
/// Without a configured timeout a hung backend keeps the session in its
/// loading state until the connection resolves.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let mut builder = ClientBuilder::new().user_agent(config.user_agent.clone());
    if let Some(seconds) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(seconds));
    }
    Ok(Arc::new(builder.build()?))
}
