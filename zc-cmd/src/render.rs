//! Plain-text renderings of the dashboard panels.

use std::fmt::Write;
use zc_core::cycle::{DashboardState, Screen, SETUP_COMMAND, SETUP_HINT};
use zc_core::gauge::GaugeView;
use zc_core::history::{format_date_label, NO_HISTORY_MESSAGE};
use zc_core::model::{CurrentReading, HealthStatus, HistoryPoint, RecommendationSet, SummaryStats};

/// Width of the gauge and distribution bars, in cells.
const BAR_WIDTH: usize = 20;

const RULE: &str = "============================================================";

/// `percent` in [0, 100] as a fixed-width bar.
fn text_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// `🟡 0.85 [████████░░░░░░░░░░░░] YELLOW ZONE`
pub fn render_gauge(reading: &CurrentReading) -> String {
    let view = GaugeView::new(reading.zc, reading.zone);
    format!(
        "{} {} [{}] {}",
        view.emoji,
        reading.zone.paint(&view.value_label),
        text_bar(view.percent),
        reading.zone.paint(&view.zone_label)
    )
}

pub fn render_current(reading: &CurrentReading) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", render_gauge(reading));
    let _ = writeln!(out, "Mode:       {}", reading.mode);
    let _ = writeln!(out, "Trend:      {}", reading.trend);
    let _ = writeln!(out, "Confidence: {}", reading.confidence_percent());
    let _ = write!(out, "Recommendation: {}", reading.recommendation);
    out
}

pub fn render_stats(stats: &SummaryStats) -> String {
    let mut out = String::new();
    for card in stats.cards() {
        let _ = writeln!(out, "{:<14} {}", format!("{}:", card.label), card.value);
    }
    let _ = writeln!(out, "Zone Distribution (Last 7 Days)");
    match stats.zone_shares() {
        Ok(shares) => {
            let lines: Vec<String> = shares
                .iter()
                .map(|share| {
                    format!(
                        "  {} {:<7} [{}] {:>3} ({})",
                        share.zone.emoji(),
                        share.zone.title(),
                        text_bar(share.percent),
                        share.count,
                        share.width()
                    )
                })
                .collect();
            out.push_str(&lines.join("\n"));
        }
        Err(e) => {
            log::warn!("Not drawing zone distribution: {}", e);
            let _ = write!(out, "  {}", e.message());
        }
    }
    out
}

pub fn render_history(history: &[HistoryPoint]) -> String {
    if history.is_empty() {
        return NO_HISTORY_MESSAGE.to_string();
    }
    history
        .iter()
        .map(|point| {
            format!(
                "{:<12} {:>6.2} {} {}",
                format_date_label(&point.timestamp),
                point.zc,
                point.zone.emoji(),
                point.zone
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_recommendations(set: &RecommendationSet) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", RecommendationSet::SUMMARY_HEADING);
    let _ = writeln!(out, "  {}", set.summary);
    for (heading, items) in set.sections() {
        let _ = writeln!(out, "{}", heading);
        for item in items {
            let _ = writeln!(out, "  • {}", item);
        }
    }
    if let Some(context) = set.context() {
        let _ = writeln!(out, "({})", context);
    }
    out.trim_end().to_string()
}

pub fn render_health(health: &HealthStatus) -> String {
    let flag = |on: bool| if on { "active" } else { "inactive" };
    format!(
        "Status: {}\nVersion: {}\nTeam size: {}\nMonitor: {}\nRecommender: {}",
        health.status,
        health.version,
        health.team_size,
        flag(health.monitor_active),
        flag(health.recommender_active)
    )
}

/// Whole-dashboard view, mirroring the web app's screens.
pub fn render_dashboard(state: &DashboardState) -> String {
    match state.screen() {
        Screen::Loading => "Loading Curator AI Dashboard...".to_string(),
        Screen::ConnectionError(message) => format!(
            "Connection Error\n{}\n{}\n  {}",
            message, SETUP_HINT, SETUP_COMMAND
        ),
        Screen::Ready => {
            let mut out = String::new();
            let _ = writeln!(out, "{}", RULE);
            let _ = writeln!(out, "🎯 Curator AI Dashboard");
            let _ = writeln!(out, "{}", RULE);
            let _ = writeln!(out, "\nCurrent Status");
            match &state.current {
                Some(reading) => {
                    let _ = writeln!(out, "{}", render_current(reading));
                }
                None => {
                    let _ = writeln!(out, "No data available. Calculate Zc to get started.");
                }
            }
            if let Some(stats) = &state.stats {
                let _ = writeln!(out, "\n7-Day Statistics");
                let _ = writeln!(out, "{}", render_stats(stats));
            }
            let _ = writeln!(out, "\nZc History (Last 7 Days)");
            let _ = write!(out, "{}", render_history(&state.history));
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zc_core::cycle::FETCH_ERROR_MESSAGE;
    use zc_core::model::ZoneDistribution;
    use zc_core::zone::Zone;

    fn reading() -> CurrentReading {
        CurrentReading {
            timestamp: None,
            zc: 1.5,
            v_generation: None,
            b_social: None,
            zone: Zone::Red,
            mode: "Mode C: The Jam".to_string(),
            trend: "INCREASING".to_string(),
            confidence: 0.6,
            recommendation: "Activate The Jam immediately.".to_string(),
        }
    }

    fn stats(data_points: u64) -> SummaryStats {
        SummaryStats {
            current_zc: 1.5,
            avg_zc: 0.8,
            current_zone: Zone::Red,
            trend: "INCREASING".to_string(),
            zone_distribution: ZoneDistribution {
                green: 5,
                yellow: 1,
                red: 1,
            },
            data_points,
        }
    }

    #[test]
    fn test_text_bar() {
        assert_eq!(text_bar(0.0), "░".repeat(20));
        assert_eq!(text_bar(100.0), "█".repeat(20));
        assert_eq!(text_bar(75.0), format!("{}{}", "█".repeat(15), "░".repeat(5)));
    }

    #[test]
    fn test_render_gauge() {
        let line = render_gauge(&reading());
        assert!(line.starts_with("🔴 "));
        assert!(line.contains("1.50"));
        assert!(line.contains("RED ZONE"));
        assert!(line.contains(&"█".repeat(15)));
    }

    #[test]
    fn test_render_stats_distribution() {
        let text = render_stats(&stats(7));
        assert!(text.contains("(71.4%)"));
        assert!(text.contains("(14.3%)"));
        assert!(text.contains("7-Day Average: 0.80"));
    }

    #[test]
    fn test_render_stats_invalid_distribution() {
        let text = render_stats(&stats(9));
        assert!(text.contains(zc_core::stats::INVALID_DATA_MESSAGE));
        assert!(!text.contains('%'));
    }

    #[test]
    fn test_render_history() {
        assert_eq!(render_history(&[]), NO_HISTORY_MESSAGE);
        let history = vec![HistoryPoint {
            timestamp: "2024-01-15T10:30:00".to_string(),
            zc: 0.85,
            zone: Zone::Yellow,
        }];
        assert_eq!(render_history(&history), "1/15/2024      0.85 🟡 YELLOW");
    }

    #[test]
    fn test_render_recommendations() {
        let set = RecommendationSet {
            summary: "Team is overloaded".to_string(),
            immediate_actions: vec!["Cancel optional meetings".to_string()],
            this_week: vec!["Run a GUSH session".to_string()],
            avoid: vec![],
            success_criteria: vec!["Zc below 1.0".to_string()],
            context: None,
        };
        let text = render_recommendations(&set);
        assert!(text.starts_with("📝 Summary\n  Team is overloaded"));
        assert!(text.contains("🚨 Immediate Actions\n  • Cancel optional meetings"));
        assert!(text.contains("❌ Avoid\n✅ Success Criteria"));
        assert!(!text.contains('('));
    }

    #[test]
    fn test_render_dashboard_screens() {
        let state = DashboardState::new();
        assert_eq!(render_dashboard(&state), "Loading Curator AI Dashboard...");

        let mut state = DashboardState::new();
        state.loading = false;
        state.error = Some(FETCH_ERROR_MESSAGE.to_string());
        let text = render_dashboard(&state);
        assert!(text.starts_with("Connection Error"));
        assert!(text.contains(SETUP_HINT));

        state.current = Some(reading());
        let text = render_dashboard(&state);
        assert!(text.contains("Mode:       Mode C: The Jam"));
        assert!(text.contains("Confidence: 60%"));
        assert!(text.ends_with(NO_HISTORY_MESSAGE));
    }
}
