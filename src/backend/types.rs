//! Request and response shapes exchanged with the analysis backend.

use serde::{Deserialize, Serialize};

use crate::app::normalize_url;

/// Body of `POST /analyze/static`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    /// Normalized website URL.
    pub url: String,
}

impl AnalysisRequest {
    /// Builds a request from raw user input, applying URL normalization.
    pub fn new(raw_url: &str) -> Self {
        Self {
            url: normalize_url(raw_url),
        }
    }
}

/// Verdict returned by the analysis backend.
///
/// Decoding is the only validation the client performs: once a value of this
/// type exists it is trusted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Risk score, nominally 0-100, higher is more suspicious.
    pub static_risk_score: f64,
    /// Free-text explanations of the score.
    #[serde(default)]
    pub static_reasons: Vec<String>,
    /// Individual signals the score was computed from.
    pub static_analysis: StaticAnalysis,
}

/// Raw static-analysis signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticAnalysis {
    /// Registrable domain the backend resolved, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Domain age in days; `None` when WHOIS could not determine it.
    #[serde(default)]
    pub domain_age_days: Option<i64>,
    /// Whether the submitted URL uses HTTPS.
    pub has_https: bool,
    /// Phishing-style keywords found in the URL.
    #[serde(default)]
    pub suspicious_keywords: Vec<String>,
    /// Whether the TLD is on the backend's spam list.
    pub suspicious_tld: bool,
    /// Top-level domain including the leading dot, e.g. `.com`.
    #[serde(default)]
    pub tld: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendHealth {
    /// Status text, `healthy` when the backend is up.
    pub status: String,
}

impl BackendHealth {
    /// Returns `true` when the backend reports itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}
