// Shared test helpers for backend fixtures.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use serde_json::{json, Value};
use site_guard::{AnalysisResult, StaticAnalysis};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Backend JSON for an old, HTTPS, keyword-free `.com` site.
#[allow(dead_code)] // Used by other test files
pub fn safe_site_json() -> Value {
    json!({
        "static_risk_score": 5,
        "static_reasons": [
            "Website uses HTTPS encryption",
            "Domain is established (9000 days old)",
            "No suspicious keywords found in URL",
            "Domain uses a standard TLD"
        ],
        "static_analysis": {
            "domain": "example.com",
            "tld": ".com",
            "has_https": true,
            "domain_age_days": 9000,
            "suspicious_keywords": [],
            "suspicious_tld": false
        }
    })
}

/// Backend JSON for a fresh phishing-looking `.xyz` site without HTTPS.
#[allow(dead_code)]
pub fn phishing_site_json() -> Value {
    json!({
        "static_risk_score": 100,
        "static_reasons": ["Domain uses a suspicious top-level domain (TLD)"],
        "static_analysis": {
            "domain": "secure-login-verify.xyz",
            "tld": ".xyz",
            "has_https": false,
            "domain_age_days": 2,
            "suspicious_keywords": ["login", "verify", "secure"],
            "suspicious_tld": true
        }
    })
}

/// Typed counterpart of [`safe_site_json`].
#[allow(dead_code)]
pub fn safe_site_result() -> AnalysisResult {
    AnalysisResult {
        static_risk_score: 5.0,
        static_reasons: vec![],
        static_analysis: StaticAnalysis {
            domain: Some("example.com".to_string()),
            domain_age_days: Some(9000),
            has_https: true,
            suspicious_keywords: vec![],
            suspicious_tld: false,
            tld: ".com".to_string(),
        },
    }
}

/// Mounts an analysis response for one normalized URL.
#[allow(dead_code)]
pub async fn mount_analysis(server: &MockServer, url: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/analyze/static"))
        .and(body_json(json!({ "url": url })))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Returns a loopback URL on which nothing is listening.
#[allow(dead_code)]
pub fn unreachable_backend_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("Failed to get address").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
