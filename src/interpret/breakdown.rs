//! Per-signal breakdown rows.

use serde::Serialize;

use crate::backend::StaticAnalysis;
use crate::config::ESTABLISHED_DOMAIN_MIN_DAYS;

/// Which analysis dimension a row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    /// Transport encryption
    Https,
    /// WHOIS registration age
    DomainAge,
    /// Phishing keywords in the URL
    Keywords,
    /// Top-level domain reputation
    Tld,
}

/// One line of the breakdown panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignalRow {
    /// Dimension this row describes.
    pub kind: SignalKind,
    /// Row heading.
    pub label: &'static str,
    /// Whether the signal looks safe.
    pub safe: bool,
    /// Short value shown beside the label.
    pub value: String,
    /// Optional explanation line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Builds the four breakdown rows: HTTPS, domain age, keywords, TLD.
pub fn derive_signal_breakdown(analysis: &StaticAnalysis) -> Vec<SignalRow> {
    vec![
        https_row(analysis.has_https),
        domain_age_row(analysis.domain_age_days),
        keyword_row(&analysis.suspicious_keywords),
        tld_row(&analysis.tld, analysis.suspicious_tld),
    ]
}

fn https_row(has_https: bool) -> SignalRow {
    SignalRow {
        kind: SignalKind::Https,
        label: "HTTPS Encryption",
        safe: has_https,
        value: if has_https { "Enabled" } else { "Missing" }.to_string(),
        detail: None,
    }
}

fn domain_age_row(domain_age_days: Option<i64>) -> SignalRow {
    let (safe, value, detail) = match domain_age_days {
        // WHOIS could not date the domain; never counts as established
        None => (
            false,
            "Unknown".to_string(),
            "Domain age could not be verified; treat unverified domains with caution",
        ),
        Some(days) => {
            // A domain exactly 30 days old is neither safe nor flagged as new
            let detail = if days < ESTABLISHED_DOMAIN_MIN_DAYS {
                "Extremely new domains are suspicious"
            } else {
                "Established domain"
            };
            (days > ESTABLISHED_DOMAIN_MIN_DAYS, format!("{days} days"), detail)
        }
    };

    SignalRow {
        kind: SignalKind::DomainAge,
        label: "Domain Age",
        safe,
        value,
        detail: Some(detail.to_string()),
    }
}

fn keyword_row(keywords: &[String]) -> SignalRow {
    let clean = keywords.is_empty();
    SignalRow {
        kind: SignalKind::Keywords,
        label: "URL Keywords",
        safe: clean,
        value: if clean { "Clean" } else { "Suspicious" }.to_string(),
        detail: Some(if clean {
            "No phishing keywords found".to_string()
        } else {
            format!("Found: {}", keywords.join(", "))
        }),
    }
}

fn tld_row(tld: &str, suspicious: bool) -> SignalRow {
    SignalRow {
        kind: SignalKind::Tld,
        label: "Top-Level Domain (TLD)",
        safe: !suspicious,
        value: tld.to_string(),
        detail: Some(
            if suspicious {
                "This TLD is often used for spam"
            } else {
                "Standard TLD"
            }
            .to_string(),
        ),
    }
}
