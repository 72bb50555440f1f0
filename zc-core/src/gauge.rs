//! Arc gauge geometry for the current Zc value.

use crate::zone::Zone;

/// Zc value that fills the gauge completely.
pub const GAUGE_FULL_SCALE: f64 = 2.0;

/// Semicircle drawn for both the track and the filled arc.
pub const ARC_PATH: &str = "M 20 100 A 80 80 0 0 1 180 100";

/// Approximate length of [`ARC_PATH`] in SVG user units.
pub const ARC_LENGTH: f64 = 251.0;

/// Stroke color of the unfilled track.
pub const TRACK_COLOR: &str = "#e5e7eb";

/// Fill percentage in [0, 100]: `min(zc / 2.0, 1.0) * 100`.
///
/// Negative and NaN values render as an empty gauge.
pub fn fill_percent(zc: f64) -> f64 {
    if zc.is_nan() {
        return 0.0;
    }
    (zc / GAUGE_FULL_SCALE).clamp(0.0, 1.0) * 100.0
}

/// Everything a renderer needs to draw the gauge.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeView {
    pub percent: f64,
    /// `stroke-dasharray` for the filled arc
    pub dash_array: String,
    /// Zc to two decimals
    pub value_label: String,
    /// e.g. "GREEN ZONE"
    pub zone_label: String,
    pub color: &'static str,
    pub emoji: &'static str,
}

impl GaugeView {
    pub fn new(zc: f64, zone: Zone) -> Self {
        let percent = fill_percent(zc);
        Self {
            percent,
            dash_array: format!("{:.2} {}", percent * ARC_LENGTH / 100.0, ARC_LENGTH),
            value_label: format!("{:.2}", zc),
            zone_label: format!("{} ZONE", zone.label()),
            color: zone.color(),
            emoji: zone.emoji(),
        }
    }
}
