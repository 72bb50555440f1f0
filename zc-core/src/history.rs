//! Date labels and line-chart layout for the Zc history.

use crate::model::HistoryPoint;
use crate::zone::{Zone, GREEN_YELLOW_THRESHOLD, YELLOW_RED_THRESHOLD};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Label used when a timestamp cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Shown instead of the chart when there is no history.
pub const NO_HISTORY_MESSAGE: &str = "No historical data available.";

pub const CHART_WIDTH: f64 = 600.0;
pub const CHART_HEIGHT: f64 = 300.0;
pub const MARGIN_LEFT: f64 = 44.0;
pub const MARGIN_RIGHT: f64 = 16.0;
pub const MARGIN_TOP: f64 = 16.0;
pub const MARGIN_BOTTOM: f64 = 36.0;

/// Finest y-axis tick spacing.
const MIN_Y_TICK_STEP: f64 = 0.5;

/// Upper bound on the number of y-axis intervals (ticks minus one).
const MAX_Y_TICK_INTERVALS: f64 = 10.0;

/// Largest Zc the y-axis is scaled to; anything above is drawn at the top.
const MAX_Y_DOMAIN: f64 = f64::MAX / 10.0;

pub const LINE_COLOR: &str = "#3b82f6";
pub const GRID_COLOR: &str = "#374151";
pub const AXIS_COLOR: &str = "#9ca3af";

/// Parse a backend timestamp.
///
/// Accepts naive ISO-8601 (what the backend emits), RFC 3339 with an offset,
/// or a bare date. Offsets are kept: the label is the calendar date in the
/// timestamp's own offset.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Date-only label (`M/D/YYYY`); time of day is dropped.
pub fn format_date_label(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%-m/%-d/%Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// A history point positioned in chart coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub zc: f64,
    pub zone: Zone,
}

impl ChartPoint {
    /// Tooltip lines: date, value, zone.
    pub fn tooltip(&self) -> [String; 3] {
        [
            self.label.clone(),
            format!("Zc: {}", self.zc),
            format!("Zone: {}", self.zone),
        ]
    }
}

/// A fixed horizontal threshold marker.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    pub value: f64,
    pub y: f64,
    pub label: &'static str,
    pub color: &'static str,
}

/// A y-axis tick.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

/// Line chart layout in a `CHART_WIDTH` x `CHART_HEIGHT` viewBox.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub points: Vec<ChartPoint>,
    pub y_max: f64,
    pub ticks: Vec<AxisTick>,
    pub reference_lines: Vec<ReferenceLine>,
}

impl ChartLayout {
    /// Lay out `data` as given (no resampling or reordering).
    ///
    /// Returns `None` for an empty sequence so callers render the fallback.
    pub fn new(data: &[HistoryPoint]) -> Option<Self> {
        if data.is_empty() {
            return None;
        }

        let max_zc = data
            .iter()
            .map(|p| p.zc)
            .filter(|zc| zc.is_finite())
            .fold(YELLOW_RED_THRESHOLD, f64::max)
            .min(MAX_Y_DOMAIN);
        let tick_step = y_tick_step(max_zc);
        // Next tick strictly above the data so the top line never sits on the frame
        let y_max = ((max_zc / tick_step).floor() + 1.0) * tick_step;

        let plot_width = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let step = if data.len() > 1 {
            plot_width / (data.len() - 1) as f64
        } else {
            0.0
        };

        let points = data
            .iter()
            .enumerate()
            .map(|(i, point)| ChartPoint {
                x: if data.len() > 1 {
                    MARGIN_LEFT + i as f64 * step
                } else {
                    MARGIN_LEFT + plot_width / 2.0
                },
                y: scale_y(point.zc, y_max),
                label: format_date_label(&point.timestamp),
                zc: point.zc,
                zone: point.zone,
            })
            .collect();

        let tick_count = (y_max / tick_step).round() as usize;
        let ticks = (0..=tick_count)
            .map(|i| {
                let value = i as f64 * tick_step;
                AxisTick {
                    value,
                    y: scale_y(value, y_max),
                    label: if tick_step < 1.0 {
                        format!("{:.1}", value)
                    } else {
                        format!("{:.0}", value)
                    },
                }
            })
            .collect();

        let reference_lines = vec![
            ReferenceLine {
                value: GREEN_YELLOW_THRESHOLD,
                y: scale_y(GREEN_YELLOW_THRESHOLD, y_max),
                label: "Green/Yellow",
                color: Zone::Yellow.color(),
            },
            ReferenceLine {
                value: YELLOW_RED_THRESHOLD,
                y: scale_y(YELLOW_RED_THRESHOLD, y_max),
                label: "Yellow/Red",
                color: Zone::Red.color(),
            },
        ];

        Some(Self {
            points,
            y_max,
            ticks,
            reference_lines,
        })
    }

    /// SVG `points` attribute for the polyline.
    pub fn polyline(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{:.1},{:.1}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Y coordinate of the x-axis.
    pub fn baseline(&self) -> f64 {
        CHART_HEIGHT - MARGIN_BOTTOM
    }

    /// Indices of points whose date label is drawn on the x-axis.
    ///
    /// At most `max_labels`, always including the first and last point.
    pub fn x_label_indices(&self, max_labels: usize) -> Vec<usize> {
        let n = self.points.len();
        if n <= max_labels || max_labels < 2 {
            return (0..n).collect();
        }
        let stride = (n - 1) as f64 / (max_labels - 1) as f64;
        (0..max_labels)
            .map(|i| (i as f64 * stride).round() as usize)
            .collect()
    }
}

/// Smallest step from 0.5, 1, 2, 5, 10, 20, 50, ... that covers `max_zc`
/// in at most `MAX_Y_TICK_INTERVALS` intervals. `max_zc` must be finite.
fn y_tick_step(max_zc: f64) -> f64 {
    let fits = |step: f64| (max_zc / step).floor() + 1.0 <= MAX_Y_TICK_INTERVALS;
    if fits(MIN_Y_TICK_STEP) {
        return MIN_Y_TICK_STEP;
    }
    let mut magnitude = 1.0;
    loop {
        for mantissa in [1.0, 2.0, 5.0] {
            let step = mantissa * magnitude;
            if fits(step) {
                return step;
            }
        }
        magnitude *= 10.0;
    }
}

/// Negative and NaN values are drawn on the baseline.
fn scale_y(value: f64, y_max: f64) -> f64 {
    let plot_height = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let clamped = value.max(0.0).min(y_max);
    MARGIN_TOP + plot_height * (1.0 - clamped / y_max)
}
