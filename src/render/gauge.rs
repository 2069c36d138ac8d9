//! Text speedometer for the protection reading.

use colored::{Color, Colorize};

use crate::config::{NEEDLE_MIN_DEGREES, NEEDLE_SWEEP_DEGREES};
use crate::interpret::ProtectionReading;

/// Number of character cells across the gauge arc.
pub const GAUGE_WIDTH: usize = 41;

const ARC_CELL: &str = "━";
const NEEDLE: &str = "▲";

/// Column (0-based) the needle points at for a given angle.
///
/// -90° maps to the first column and +90° to the last; angles outside the
/// sweep are pinned to the ends.
pub fn needle_column(needle_angle_degrees: f64, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    let fraction = ((needle_angle_degrees - NEEDLE_MIN_DEGREES) / NEEDLE_SWEEP_DEGREES)
        .clamp(0.0, 1.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let column = (fraction * (width - 1) as f64).round() as usize;
    column
}

/// Formats a protection value the way the gauge prints it (`72%`, `49.9%`).
///
/// Fractions are truncated, not rounded, so a value just under a category
/// threshold never prints as the threshold itself.
pub fn format_percent(protection: f64) -> String {
    // Nudge before flooring so values like 33.3 (stored as 33.29999...) keep their last digit
    let tenths = (protection * 10.0 + 1e-9).floor();
    if tenths % 10.0 == 0.0 {
        format!("{:.0}%", tenths / 10.0)
    } else {
        format!("{:.1}%", tenths / 10.0)
    }
}

/// Parses `#rrggbb` into a terminal color.
pub fn hex_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
    };
    match (digits.len(), channel(0..2), channel(2..4), channel(4..6)) {
        (6, Some(r), Some(g), Some(b)) => Color::TrueColor { r, g, b },
        _ => Color::White,
    }
}

/// Arc gradient: red on the left third, amber in the middle, green on the right.
fn arc_color(column: usize, width: usize) -> Color {
    let third = width as f64 / 3.0;
    let position = column as f64;
    if position < third {
        hex_color("#ef4444")
    } else if position < 2.0 * third {
        hex_color("#f59e0b")
    } else {
        hex_color("#10b981")
    }
}

/// Renders the arc, the needle marker, the percentage and the category label.
pub fn render_gauge(reading: &ProtectionReading) -> String {
    let color = hex_color(reading.color);
    let needle_at = needle_column(reading.needle_angle_degrees, GAUGE_WIDTH);

    let arc: String = (0..GAUGE_WIDTH)
        .map(|column| ARC_CELL.color(arc_color(column, GAUGE_WIDTH)).to_string())
        .collect();
    let needle = format!("{}{}", " ".repeat(needle_at), NEEDLE.color(color).bold());

    let percent = format_percent(reading.protection);
    let label = reading.category.label();
    let pad = |text_len: usize| " ".repeat(GAUGE_WIDTH.saturating_sub(text_len) / 2);

    format!(
        "  {arc}\n  {needle}\n  {}{}\n  {}{}\n",
        pad(percent.chars().count()),
        percent.bold(),
        pad(label.chars().count()),
        label.color(color).bold(),
    )
}
