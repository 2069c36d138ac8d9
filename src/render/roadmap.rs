//! Static roadmap panel.

use std::fmt::Write;

use colored::Colorize;

/// Whether a roadmap capability exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadmapStatus {
    /// Shipped and used by every analysis.
    Available,
    /// Announced only; nothing in this client implements it.
    Planned,
}

/// One roadmap entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoadmapItem {
    /// Capability name.
    pub title: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Availability.
    pub status: RoadmapStatus,
}

/// The fixed roadmap shown beside results and on an idle screen.
pub const ROADMAP: [RoadmapItem; 3] = [
    RoadmapItem {
        title: "Static Website Analysis",
        description: "Whois, TLD, SSL, Keyword checks",
        status: RoadmapStatus::Available,
    },
    RoadmapItem {
        title: "Dynamic Behavior Analysis",
        description: "Playwright execution & screenshot analysis (Planned)",
        status: RoadmapStatus::Planned,
    },
    RoadmapItem {
        title: "AI Agent Detection",
        description: "Gemini/LangChain deep content analysis (Planned)",
        status: RoadmapStatus::Planned,
    },
];

/// Renders the roadmap panel.
pub fn render_roadmap() -> String {
    let mut out = format!("{}\n", "System Roadmap".bold());
    for item in &ROADMAP {
        let (marker, title) = match item.status {
            RoadmapStatus::Available => ("●".green(), item.title.bold()),
            RoadmapStatus::Planned => ("○".dimmed(), item.title.dimmed()),
        };
        let _ = writeln!(out, "  {marker} {title}\n      {}", item.description.dimmed());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_static_analysis_available() {
        let available: Vec<_> = ROADMAP
            .iter()
            .filter(|item| item.status == RoadmapStatus::Available)
            .map(|item| item.title)
            .collect();
        assert_eq!(available, ["Static Website Analysis"]);
    }

    #[test]
    fn test_render_roadmap_lists_all_items() {
        colored::control::set_override(false);
        let rendered = render_roadmap();
        assert!(rendered.starts_with("System Roadmap\n"));
        for item in &ROADMAP {
            assert!(rendered.contains(item.title));
            assert!(rendered.contains(item.description));
        }
    }
}
