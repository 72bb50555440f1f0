//! Zc history line chart drawn as inline SVG.

use dioxus::prelude::*;
use zc_core::history::{
    ChartLayout, AXIS_COLOR, CHART_HEIGHT, CHART_WIDTH, GRID_COLOR, LINE_COLOR, MARGIN_LEFT,
    MARGIN_RIGHT, NO_HISTORY_MESSAGE,
};
use zc_core::model::HistoryPoint;

/// Maximum number of date labels drawn under the x-axis.
const MAX_X_LABELS: usize = 7;

fn point_radius(active: bool) -> &'static str {
    if active {
        "6"
    } else {
        "4"
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct HistoryChartProps {
    /// Time-ordered readings, rendered as given
    pub data: Vec<HistoryPoint>,
}

/// Line chart with threshold markers at 0.7 and 1.0 and a hover tooltip.
#[component]
pub fn HistoryChart(props: HistoryChartProps) -> Element {
    let mut hovered: Signal<Option<usize>> = use_signal(|| None);

    let Some(layout) = ChartLayout::new(&props.data) else {
        return rsx! {
            p { class: "no-data", "{NO_HISTORY_MESSAGE}" }
        };
    };

    let plot_right = CHART_WIDTH - MARGIN_RIGHT;
    let baseline = layout.baseline();
    let polyline = layout.polyline();
    let view_box = format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT);

    let tick_labels: Vec<(f64, String)> = layout
        .ticks
        .iter()
        .map(|t| (t.y, t.label.clone()))
        .collect();
    let x_labels: Vec<(f64, String)> = layout
        .x_label_indices(MAX_X_LABELS)
        .into_iter()
        .filter_map(|i| layout.points.get(i))
        .map(|p| (p.x, p.label.clone()))
        .collect();
    let tooltip = hovered().and_then(|i| layout.points.get(i)).map(|p| {
        let left = p.x / CHART_WIDTH * 100.0;
        (left, p.tooltip())
    });

    rsx! {
        div {
            style: "position: relative; width: 100%;",
            svg {
                width: "100%",
                height: "300",
                view_box: "{view_box}",
                onmouseleave: move |_| hovered.set(None),

                for (y, label) in tick_labels.iter() {
                    g {
                        key: "{label}",
                        line {
                            x1: MARGIN_LEFT,
                            y1: *y,
                            x2: plot_right,
                            y2: *y,
                            stroke: GRID_COLOR,
                            stroke_dasharray: "3 3",
                        }
                        text {
                            x: MARGIN_LEFT - 8.0,
                            y: *y + 4.0,
                            text_anchor: "end",
                            font_size: "11",
                            fill: AXIS_COLOR,
                            "{label}"
                        }
                    }
                }

                line {
                    x1: MARGIN_LEFT,
                    y1: baseline,
                    x2: plot_right,
                    y2: baseline,
                    stroke: AXIS_COLOR,
                }

                for (i, (x, label)) in x_labels.iter().enumerate() {
                    text {
                        key: "x-{i}",
                        x: *x,
                        y: baseline + 18.0,
                        text_anchor: "middle",
                        font_size: "11",
                        fill: AXIS_COLOR,
                        "{label}"
                    }
                }

                for reference in layout.reference_lines.iter() {
                    g {
                        key: "{reference.label}",
                        line {
                            x1: MARGIN_LEFT,
                            y1: reference.y,
                            x2: plot_right,
                            y2: reference.y,
                            stroke: reference.color,
                            stroke_dasharray: "3 3",
                        }
                        text {
                            x: plot_right,
                            y: reference.y - 4.0,
                            text_anchor: "end",
                            font_size: "11",
                            fill: reference.color,
                            "{reference.label}"
                        }
                    }
                }

                polyline {
                    points: "{polyline}",
                    fill: "none",
                    stroke: LINE_COLOR,
                    stroke_width: "3",
                }

                for (i, point) in layout.points.iter().enumerate() {
                    circle {
                        key: "{i}",
                        cx: point.x,
                        cy: point.y,
                        r: point_radius(hovered() == Some(i)),
                        fill: LINE_COLOR,
                        onmouseenter: move |_| hovered.set(Some(i)),
                    }
                }
            }

            if let Some((left, [date, zc, zone])) = tooltip {
                div {
                    class: "custom-tooltip",
                    style: "position: absolute; top: 8px; left: {left}%; transform: translateX(-50%); background: #111827; color: #f9fafb; border: 1px solid #374151; border-radius: 4px; padding: 6px 10px; font-size: 12px; pointer-events: none;",
                    p { class: "date", style: "margin: 0;", "{date}" }
                    p { class: "zc", style: "margin: 0;", "{zc}" }
                    p { class: "zone", style: "margin: 0;", "{zone}" }
                }
            }
        }
    }
}
