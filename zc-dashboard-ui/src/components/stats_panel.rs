//! 7-day statistics: summary cards and the zone distribution bars.

use dioxus::prelude::*;
use zc_core::model::SummaryStats;

#[derive(Props, Clone, PartialEq)]
pub struct StatsPanelProps {
    pub stats: SummaryStats,
}

#[component]
pub fn StatsPanel(props: StatsPanelProps) -> Element {
    let cards: Vec<(&'static str, String, &'static str)> = props
        .stats
        .cards()
        .into_iter()
        .map(|card| (card.label, card.value, card.color.unwrap_or("inherit")))
        .collect();

    // Bars are only drawn once the counts are known to add up
    let distribution = match props.stats.zone_shares() {
        Ok(shares) => {
            let bars: Vec<(String, String, &'static str, u64)> = shares
                .iter()
                .map(|s| {
                    (
                        format!("{} {}", s.zone.emoji(), s.zone.title()),
                        s.width(),
                        s.zone.color(),
                        s.count,
                    )
                })
                .collect();
            rsx! {
                div {
                    class: "zone-bars",
                    for (label, width, color, count) in bars.into_iter() {
                        div {
                            key: "{label}",
                            class: "zone-bar",
                            style: "display: flex; align-items: center; gap: 8px; margin: 4px 0;",
                            span { class: "zone-bar-label", style: "width: 80px;", "{label}" }
                            div {
                                style: "flex: 1; background: #374151; border-radius: 4px; height: 12px;",
                                div {
                                    class: "zone-bar-fill",
                                    style: "width: {width}; background-color: {color}; height: 100%; border-radius: 4px;",
                                }
                            }
                            span { class: "zone-bar-count", style: "width: 32px; text-align: right;", "{count}" }
                        }
                    }
                }
            }
        }
        Err(e) => {
            log::warn!("Not drawing zone distribution: {}", e);
            let message = e.message();
            rsx! {
                p { class: "invalid-data", style: "color: #f59e0b;", "{message}" }
            }
        }
    };

    rsx! {
        div {
            class: "stats-panel",
            style: "display: grid; grid-template-columns: 1fr 1fr; gap: 8px;",
            for (label, value, color) in cards.into_iter() {
                div {
                    key: "{label}",
                    class: "stat-card",
                    style: "background: #111827; border-radius: 6px; padding: 8px;",
                    div { class: "stat-label", style: "font-size: 12px; color: #9ca3af;", "{label}" }
                    div { class: "stat-value", style: "font-size: 22px; font-weight: bold; color: {color};", "{value}" }
                }
            }
            div {
                class: "stat-card full-width",
                style: "grid-column: 1 / -1; background: #111827; border-radius: 6px; padding: 8px;",
                div { class: "stat-label", style: "font-size: 12px; color: #9ca3af;", "Zone Distribution (Last 7 Days)" }
                {distribution}
            }
        }
    }
}
