//! Summary cards and zone-distribution bars.
//!
//! The distribution is validated before any proportion is computed: a
//! summary whose counts do not add up renders an explicit invalid state.

use crate::model::SummaryStats;
use crate::zone::Zone;
use thiserror::Error;

/// Shown when the summary window holds no data points.
pub const NO_DATA_POINTS_MESSAGE: &str = "No data points in the last 7 days.";

/// Shown when the backend's distribution contradicts its own totals.
pub const INVALID_DATA_MESSAGE: &str = "Invalid data: zone distribution does not match data points.";

/// Reasons a zone distribution cannot be drawn.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    #[error("summary has no data points")]
    NoDataPoints,

    #[error("zone counts sum to {counted} but data_points is {data_points}")]
    DistributionMismatch { counted: u64, data_points: u64 },
}

impl StatsError {
    /// User-facing message for the distribution area.
    pub fn message(&self) -> &'static str {
        match self {
            StatsError::NoDataPoints => NO_DATA_POINTS_MESSAGE,
            StatsError::DistributionMismatch { .. } => INVALID_DATA_MESSAGE,
        }
    }
}

/// One bar of the distribution chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneShare {
    pub zone: Zone,
    pub count: u64,
    /// count / data_points * 100
    pub percent: f64,
}

impl ZoneShare {
    /// CSS width to one decimal, e.g. "71.4%".
    pub fn width(&self) -> String {
        format!("{:.1}%", self.percent)
    }
}

/// One of the four summary cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    /// Zone color for zone-dependent cards
    pub color: Option<&'static str>,
}

impl SummaryStats {
    /// Check the distribution against `data_points`.
    pub fn validate(&self) -> Result<(), StatsError> {
        if self.data_points == 0 {
            return Err(StatsError::NoDataPoints);
        }
        let counted = self.zone_distribution.total();
        if counted != Some(self.data_points) {
            return Err(StatsError::DistributionMismatch {
                // Overflowing counts saturate
                counted: counted.unwrap_or(u64::MAX),
                data_points: self.data_points,
            });
        }
        Ok(())
    }

    /// GREEN, YELLOW, RED bars, or why they cannot be drawn.
    pub fn zone_shares(&self) -> Result<[ZoneShare; 3], StatsError> {
        self.validate()?;
        let total = self.data_points as f64;
        Ok(Zone::DISTRIBUTION_ORDER.map(|zone| {
            let count = self.zone_distribution.count(zone);
            ZoneShare {
                zone,
                count,
                percent: count as f64 / total * 100.0,
            }
        }))
    }

    /// Current Zc, 7-day average, current zone, trend.
    pub fn cards(&self) -> [StatCard; 4] {
        let zone_color = Some(self.current_zone.color());
        [
            StatCard {
                label: "Current Zc",
                value: format!("{:.2}", self.current_zc),
                color: zone_color,
            },
            StatCard {
                label: "7-Day Average",
                value: format!("{:.2}", self.avg_zc),
                color: None,
            },
            StatCard {
                label: "Current Zone",
                value: match self.current_zone {
                    Zone::Unknown => String::new(),
                    zone => zone.label().to_string(),
                },
                color: zone_color,
            },
            StatCard {
                label: "Trend",
                value: self.trend.clone(),
                color: None,
            },
        ]
    }
}
