//! HTTP implementation of the analysis backend.

use std::sync::Arc;

use log::debug;
use url::Url;

use super::types::{AnalysisRequest, AnalysisResult, BackendHealth};
use super::AnalysisBackend;
use crate::config::{ANALYZE_STATIC_PATH, HEALTH_PATH};
use crate::error_handling::{BackendError, InitializationError};

/// Talks to the analysis service over HTTP.
///
/// Requests carry no authentication headers. The base URL is treated as an
/// origin: endpoint paths replace any path it carries.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Arc<reqwest::Client>,
    analyze_endpoint: Url,
    health_endpoint: Url,
}

impl HttpBackend {
    /// Creates a backend rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::InvalidBackendUrlError` when `base_url` is
    /// not an absolute http(s) URL.
    pub fn new(client: Arc<reqwest::Client>, base_url: &str) -> Result<Self, InitializationError> {
        let invalid = |reason: String| InitializationError::InvalidBackendUrlError {
            url: base_url.to_string(),
            reason,
        };

        let base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", base.scheme())));
        }
        let analyze_endpoint = base
            .join(ANALYZE_STATIC_PATH)
            .map_err(|e| invalid(e.to_string()))?;
        let health_endpoint = base
            .join(HEALTH_PATH)
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            client,
            analyze_endpoint,
            health_endpoint,
        })
    }

    /// Full URL of the analysis endpoint.
    pub fn analyze_endpoint(&self) -> &Url {
        &self.analyze_endpoint
    }

    /// Full URL of the health endpoint.
    pub fn health_endpoint(&self) -> &Url {
        &self.health_endpoint
    }

    /// Asks the backend whether it is up.
    ///
    /// # Errors
    ///
    /// Fails the same way as [`AnalysisBackend::analyze`].
    pub async fn health(&self) -> Result<BackendHealth, BackendError> {
        let response = self
            .client
            .get(self.health_endpoint.clone())
            .send()
            .await?;
        decode_body(response).await
    }
}

impl AnalysisBackend for HttpBackend {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, BackendError> {
        debug!("POST {} url={}", self.analyze_endpoint, request.url);
        let response = self
            .client
            .post(self.analyze_endpoint.clone())
            .json(request)
            .send()
            .await?;
        decode_body(response).await
    }
}

async fn decode_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, BackendError> {
    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::Status(status.as_u16()));
    }
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
