//! Breakdown panel.

use std::fmt::Write;

use colored::Colorize;

use crate::interpret::SignalRow;

const LABEL_WIDTH: usize = 24;

/// Renders one line per signal, with its detail underneath when present.
pub fn render_breakdown(rows: &[SignalRow]) -> String {
    let mut out = format!("{}\n", "Static Analysis Breakdown".bold());
    for row in rows {
        let (marker, value) = if row.safe {
            ("✔".green(), row.value.green().bold())
        } else {
            ("⚠".red(), row.value.red().bold())
        };
        let _ = writeln!(
            out,
            "  {marker} {:<width$} {value}",
            row.label,
            width = LABEL_WIDTH
        );
        if let Some(detail) = &row.detail {
            let _ = writeln!(out, "      {}", detail.dimmed());
        }
    }
    out
}

/// Renders the backend's reasons as a bulleted list.
pub fn render_reasons(reasons: &[String]) -> String {
    let mut out = format!("{}\n", "Reasons".bold());
    if reasons.is_empty() {
        let _ = writeln!(out, "  {}", "(none reported)".dimmed());
    }
    for reason in reasons {
        let _ = writeln!(out, "  • {reason}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpret::SignalKind;

    #[test]
    fn test_rows_marked_by_safety() {
        colored::control::set_override(false);
        let rows = vec![
            SignalRow {
                kind: SignalKind::Https,
                label: "HTTPS Encryption",
                safe: true,
                value: "Enabled".to_string(),
                detail: None,
            },
            SignalRow {
                kind: SignalKind::Tld,
                label: "Top-Level Domain (TLD)",
                safe: false,
                value: ".xyz".to_string(),
                detail: Some("This TLD is often used for spam".to_string()),
            },
        ];

        let rendered = render_breakdown(&rows);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Static Analysis Breakdown");
        assert!(lines[1].starts_with("  ✔ HTTPS Encryption"));
        assert!(lines[1].ends_with("Enabled"));
        assert!(lines[2].starts_with("  ⚠ Top-Level Domain (TLD)"));
        assert_eq!(lines[3].trim(), "This TLD is often used for spam");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_reasons_list() {
        colored::control::set_override(false);
        let rendered = render_reasons(&["Website uses HTTPS encryption".to_string()]);
        assert!(rendered.contains("  • Website uses HTTPS encryption"));
        assert!(render_reasons(&[]).contains("(none reported)"));
    }
}
