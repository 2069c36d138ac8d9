//! Risk score to protection gauge mapping.

use log::debug;
use serde::Serialize;
use strum_macros::EnumIter;

use crate::config::{NEEDLE_MIN_DEGREES, NEEDLE_SWEEP_DEGREES};

const RED: &str = "#ef4444";
const AMBER: &str = "#f59e0b";
const GREEN: &str = "#10b981";

/// Discrete safety category derived from the protection percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskCategory {
    /// protection < 50
    HighRisk,
    /// 50 <= protection < 80
    ModerateRisk,
    /// 80 <= protection < 90
    LowRisk,
    /// protection >= 90
    HighSafety,
}

impl RiskCategory {
    /// Picks the category for a protection percentage.
    ///
    /// Thresholds are lower-inclusive and evaluated from the riskiest band up.
    pub fn from_protection(protection: f64) -> Self {
        if protection < 50.0 {
            RiskCategory::HighRisk
        } else if protection < 80.0 {
            RiskCategory::ModerateRisk
        } else if protection < 90.0 {
            RiskCategory::LowRisk
        } else {
            RiskCategory::HighSafety
        }
    }

    /// Upper-case display label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::HighRisk => "HIGH RISK",
            RiskCategory::ModerateRisk => "MODERATE RISK",
            RiskCategory::LowRisk => "LOW RISK",
            RiskCategory::HighSafety => "HIGH SAFETY",
        }
    }

    /// Display color as a `#rrggbb` hex string.
    pub fn color(&self) -> &'static str {
        match self {
            RiskCategory::HighRisk => RED,
            RiskCategory::ModerateRisk => AMBER,
            RiskCategory::LowRisk | RiskCategory::HighSafety => GREEN,
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the gauge needs to draw one verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProtectionReading {
    /// Complement of the risk score, always within [0, 100].
    pub protection: f64,
    /// Category for `protection`.
    pub category: RiskCategory,
    /// Color for `category`.
    pub color: &'static str,
    /// Needle rotation: -90 at 0% protection, +90 at 100%.
    pub needle_angle_degrees: f64,
}

/// Maps a backend risk score onto the protection gauge.
///
/// The backend's range is not trusted: protection is clamped to [0, 100], so
/// the needle never leaves [-90, 90]. A non-finite score reads as no
/// protection at all.
pub fn derive_protection(risk_score: f64) -> ProtectionReading {
    let protection = if risk_score.is_finite() {
        let raw = 100.0 - risk_score;
        let clamped = raw.clamp(0.0, 100.0);
        if clamped != raw {
            debug!("Risk score {risk_score} outside 0-100; protection clamped to {clamped}");
        }
        clamped
    } else {
        debug!("Non-finite risk score {risk_score}; treating as no protection");
        0.0
    };

    let category = RiskCategory::from_protection(protection);
    ProtectionReading {
        protection,
        category,
        color: category.color(),
        needle_angle_degrees: NEEDLE_MIN_DEGREES + (protection / 100.0) * NEEDLE_SWEEP_DEGREES,
    }
}
