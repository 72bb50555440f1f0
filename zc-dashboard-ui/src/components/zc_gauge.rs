//! Arc gauge for the current Zc value.

use dioxus::prelude::*;
use zc_core::gauge::{GaugeView, ARC_PATH, TRACK_COLOR};
use zc_core::zone::Zone;

#[derive(Props, Clone, PartialEq)]
pub struct ZcGaugeProps {
    pub zc: f64,
    pub zone: Zone,
}

/// Semicircular gauge, full at Zc = 2.0, colored by zone.
#[component]
pub fn ZcGauge(props: ZcGaugeProps) -> Element {
    let view = GaugeView::new(props.zc, props.zone);

    rsx! {
        div {
            class: "zc-gauge",
            style: "display: flex; flex-direction: column; align-items: center;",
            svg {
                width: "200",
                height: "120",
                view_box: "0 0 200 120",
                path {
                    d: ARC_PATH,
                    fill: "none",
                    stroke: TRACK_COLOR,
                    stroke_width: "20",
                    stroke_linecap: "round",
                }
                path {
                    d: ARC_PATH,
                    fill: "none",
                    stroke: view.color,
                    stroke_width: "20",
                    stroke_linecap: "round",
                    stroke_dasharray: "{view.dash_array}",
                    style: "transition: stroke-dasharray 0.5s ease;",
                }
                text {
                    x: "100",
                    y: "90",
                    text_anchor: "middle",
                    font_size: "32",
                    font_weight: "bold",
                    fill: view.color,
                    "{view.value_label}"
                }
            }
            div {
                class: "zone-indicator",
                span { class: "zone-emoji", "{view.emoji}" }
                span {
                    class: "zone-label",
                    style: "color: {view.color}; font-weight: bold; margin-left: 6px;",
                    "{view.zone_label}"
                }
            }
        }
    }
}
