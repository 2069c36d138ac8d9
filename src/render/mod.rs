//! Terminal presentation.
//!
//! Turns interpreted results into text panels (header, gauge, breakdown,
//! roadmap) or JSON documents. Every function returns a `String`; callers
//! decide where it is written.

mod breakdown;
mod gauge;
mod roadmap;

use std::fmt::Write;

use colored::Colorize;
use serde::Serialize;

pub use breakdown::{render_breakdown, render_reasons};
pub use gauge::{format_percent, hex_color, needle_column, render_gauge, GAUGE_WIDTH};
pub use roadmap::{render_roadmap, RoadmapItem, RoadmapStatus, ROADMAP};

use crate::app::UiState;
use crate::interpret::{interpret, Interpretation};

const DISCLAIMER: &str =
    "Score is based on static analysis and does not guarantee complete safety.";

/// Title block printed once per text session.
pub fn render_header() -> String {
    format!(
        "{}\n{}\n",
        "Fake Website Detection".bold(),
        "Detect suspicious websites before you trust them".dimmed()
    )
}

/// Line shown while a request is in flight.
pub fn render_loading(url: &str) -> String {
    format!("{} {url}\n", "Analyzing...".cyan())
}

/// Full result view: gauge, disclaimer, breakdown, optional reasons, roadmap.
pub fn render_report(interpretation: &Interpretation, show_reasons: bool) -> String {
    let mut out = String::new();
    if let Some(domain) = &interpretation.domain {
        let _ = writeln!(out, "{} {domain}\n", "Domain:".bold());
    }
    out += &render_gauge(&interpretation.reading);
    let _ = writeln!(out, "\n  {}\n", DISCLAIMER.dimmed());
    out += &render_breakdown(&interpretation.signals);
    if show_reasons {
        let _ = writeln!(out, "\n{}", render_reasons(&interpretation.reasons));
    } else {
        out.push('\n');
    }
    out += &render_roadmap();
    out
}

/// Error panel for a failed analysis.
pub fn render_error(message: &str) -> String {
    format!("{} {message}\n", "Error:".red().bold())
}

/// Text view for any state.
///
/// With no result and nothing loading, only the roadmap is shown.
pub fn render_state(state: &UiState, url: &str, show_reasons: bool) -> String {
    match state {
        UiState::Idle => render_roadmap(),
        UiState::Loading => render_loading(url),
        UiState::Success(result) => render_report(&interpret(result), show_reasons),
        UiState::Error(message) => render_error(message),
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Interpretation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// JSON document for a settled state; `None` for `Idle` and `Loading`.
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization fails.
pub fn render_json(state: &UiState, url: &str) -> Result<Option<String>, serde_json::Error> {
    let report = match state {
        UiState::Idle | UiState::Loading => return Ok(None),
        UiState::Success(result) => JsonReport {
            url,
            result: Some(interpret(result)),
            error: None,
        },
        UiState::Error(message) => JsonReport {
            url,
            result: None,
            error: Some(message),
        },
    };
    serde_json::to_string(&report).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{AnalysisResult, StaticAnalysis};

    fn result() -> AnalysisResult {
        AnalysisResult {
            static_risk_score: 65.0,
            static_reasons: vec!["Domain uses a suspicious top-level domain (TLD)".to_string()],
            static_analysis: StaticAnalysis {
                domain: Some("secure-login.xyz".to_string()),
                domain_age_days: Some(3),
                has_https: false,
                suspicious_keywords: vec!["secure".to_string(), "login".to_string()],
                suspicious_tld: true,
                tld: ".xyz".to_string(),
            },
        }
    }

    #[test]
    fn test_idle_shows_roadmap_only() {
        colored::control::set_override(false);
        let rendered = render_state(&UiState::Idle, "", false);
        assert_eq!(rendered, render_roadmap());
    }

    #[test]
    fn test_report_contains_all_panels() {
        colored::control::set_override(false);
        let rendered = render_state(&UiState::Success(result()), "https://secure-login.xyz", false);

        assert!(rendered.contains("Domain: secure-login.xyz"));
        assert!(rendered.contains("35%"));
        assert!(rendered.contains("HIGH RISK"));
        assert!(rendered.contains(DISCLAIMER));
        assert!(rendered.contains("Found: secure, login"));
        assert!(rendered.contains("System Roadmap"));
        assert!(!rendered.contains("Reasons"));
    }

    #[test]
    fn test_report_with_reasons() {
        colored::control::set_override(false);
        let rendered = render_report(&interpret(&result()), true);
        assert!(rendered.contains("• Domain uses a suspicious top-level domain (TLD)"));
    }

    #[test]
    fn test_error_panel() {
        colored::control::set_override(false);
        let rendered = render_state(&UiState::Error("boom".to_string()), "", false);
        assert_eq!(rendered, "Error: boom\n");
    }

    #[test]
    fn test_json_success_document() {
        let json = render_json(&UiState::Success(result()), "https://secure-login.xyz")
            .unwrap()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["url"], "https://secure-login.xyz");
        assert_eq!(value["result"]["reading"]["protection"], 35.0);
        assert_eq!(value["result"]["reading"]["category"], "HIGH_RISK");
        assert_eq!(value["result"]["signals"][0]["kind"], "https");
        assert_eq!(value["result"]["signals"][0]["safe"], false);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_json_error_document() {
        let json = render_json(&UiState::Error("boom".to_string()), "https://x.test")
            .unwrap()
            .unwrap();
        assert_eq!(json, r#"{"url":"https://x.test","error":"boom"}"#);
    }

    #[test]
    fn test_json_nothing_for_unsettled_states() {
        assert!(render_json(&UiState::Idle, "").unwrap().is_none());
        assert!(render_json(&UiState::Loading, "").unwrap().is_none());
    }
}
