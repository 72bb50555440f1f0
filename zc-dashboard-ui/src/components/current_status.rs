//! Current status panel body: gauge, details and the backend's one-line advice.

use super::ZcGauge;
use dioxus::prelude::*;
use zc_core::model::CurrentReading;

#[derive(Props, Clone, PartialEq)]
pub struct CurrentStatusProps {
    pub current: Option<CurrentReading>,
}

#[component]
pub fn CurrentStatus(props: CurrentStatusProps) -> Element {
    let Some(current) = props.current else {
        return rsx! {
            p { "No data available. Calculate Zc to get started." }
        };
    };
    let mode_class = current.mode_class();
    let trend_class = current.trend_class();
    let confidence = current.confidence_percent();
    let accent = current.zone.color();

    rsx! {
        ZcGauge { zc: current.zc, zone: current.zone }
        div {
            class: "status-details",
            style: "margin: 12px 0;",
            div {
                class: "detail-item",
                span { class: "label", "Mode: " }
                span { class: "mode {mode_class}", "{current.mode}" }
            }
            div {
                class: "detail-item",
                span { class: "label", "Trend: " }
                span { class: "trend {trend_class}", "{current.trend}" }
            }
            div {
                class: "detail-item",
                span { class: "label", "Confidence: " }
                span { class: "confidence", "{confidence}" }
            }
        }
        div {
            class: "recommendation-box",
            style: "padding: 8px 12px; border-left: 4px solid {accent}; background: #111827;",
            strong { "Recommendation:" }
            p { style: "margin: 4px 0 0 0;", "{current.recommendation}" }
        }
    }
}
