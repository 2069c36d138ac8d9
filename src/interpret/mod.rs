//! Result interpretation.
//!
//! Pure functions that turn a backend verdict into display values: the
//! protection gauge reading and the per-signal breakdown. Nothing here does
//! I/O, so every mapping is testable in isolation.

mod breakdown;
mod protection;

use serde::Serialize;

pub use breakdown::{derive_signal_breakdown, SignalKind, SignalRow};
pub use protection::{derive_protection, ProtectionReading, RiskCategory};

use crate::backend::AnalysisResult;

/// Display-ready view of one [`AnalysisResult`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interpretation {
    /// Registrable domain, when the backend reported one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Score the reading was derived from, as received.
    pub risk_score: f64,
    /// Gauge values.
    pub reading: ProtectionReading,
    /// Breakdown rows in display order.
    pub signals: Vec<SignalRow>,
    /// Backend reasons, passed through verbatim.
    pub reasons: Vec<String>,
}

/// Interprets a verdict for display.
pub fn interpret(result: &AnalysisResult) -> Interpretation {
    Interpretation {
        domain: result.static_analysis.domain.clone(),
        risk_score: result.static_risk_score,
        reading: derive_protection(result.static_risk_score),
        signals: derive_signal_breakdown(&result.static_analysis),
        reasons: result.static_reasons.clone(),
    }
}
