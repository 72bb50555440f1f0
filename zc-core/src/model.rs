//! Client-side projections of the backend's JSON responses.
//!
//! All structs are read-only snapshots: a poll replaces them wholesale.

use crate::zone::Zone;
use serde::{Deserialize, Serialize};

/// Latest Zc snapshot from `/api/zc/current`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentReading {
    #[serde(default)]
    pub timestamp: Option<String>,
    pub zc: f64,
    /// Information generation rate the backend derived Zc from.
    #[serde(default)]
    pub v_generation: Option<f64>,
    /// Social processing bandwidth the backend derived Zc from.
    #[serde(default)]
    pub b_social: Option<f64>,
    pub zone: Zone,
    pub mode: String,
    pub trend: String,
    /// Backend confidence in [0, 1].
    pub confidence: f64,
    pub recommendation: String,
}

impl CurrentReading {
    /// Confidence as a whole percentage, e.g. "85%".
    pub fn confidence_percent(&self) -> String {
        format!("{}%", (self.confidence * 100.0).round() as i64)
    }

    pub fn mode_class(&self) -> String {
        css_class("mode", &self.mode)
    }

    pub fn trend_class(&self) -> String {
        css_class("trend", &self.trend)
    }
}

/// `"Mode A: Study Hall"` -> `"mode-mode-a:-study-hall"`
fn css_class(prefix: &str, label: &str) -> String {
    let slug = label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    format!("{}-{}", prefix, slug)
}

/// A single element of the 7-day history, ordered by time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub timestamp: String,
    pub zc: f64,
    pub zone: Zone,
}

/// Envelope returned by `/api/zc/history`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub data: Vec<HistoryPoint>,
    #[serde(default)]
    pub count: Option<u64>,
}

/// Per-zone counts over the summary window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ZoneDistribution {
    #[serde(rename = "GREEN", default)]
    pub green: u64,
    #[serde(rename = "YELLOW", default)]
    pub yellow: u64,
    #[serde(rename = "RED", default)]
    pub red: u64,
}

impl ZoneDistribution {
    pub fn count(&self, zone: Zone) -> u64 {
        match zone {
            Zone::Green => self.green,
            Zone::Yellow => self.yellow,
            Zone::Red => self.red,
            Zone::Unknown => 0,
        }
    }

    /// Sum of the three counts, `None` if it overflows.
    pub fn total(&self) -> Option<u64> {
        self.green.checked_add(self.yellow)?.checked_add(self.red)
    }
}

/// Aggregate summary from `/api/stats/summary`.
///
/// The backend omits `current_zone` and `data_points` when it has no history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub current_zc: f64,
    pub avg_zc: f64,
    #[serde(default)]
    pub current_zone: Zone,
    pub trend: String,
    #[serde(default)]
    pub zone_distribution: ZoneDistribution,
    #[serde(default)]
    pub data_points: u64,
}

/// Structured guidance from `/api/recommendations`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub summary: String,
    #[serde(default)]
    pub immediate_actions: Vec<String>,
    #[serde(default)]
    pub this_week: Vec<String>,
    #[serde(default)]
    pub avoid: Vec<String>,
    #[serde(default)]
    pub success_criteria: Vec<String>,
    #[serde(default)]
    pub context: Option<String>,
}

impl RecommendationSet {
    pub const SUMMARY_HEADING: &'static str = "📝 Summary";

    /// The four list sections in display order.
    pub fn sections(&self) -> [(&'static str, &[String]); 4] {
        [
            ("🚨 Immediate Actions", &self.immediate_actions),
            ("📅 This Week", &self.this_week),
            ("❌ Avoid", &self.avoid),
            ("✅ Success Criteria", &self.success_criteria),
        ]
    }

    /// Context line, if the backend sent a non-empty one.
    pub fn context(&self) -> Option<&str> {
        self.context
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// Backend liveness report from `/api/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub team_size: u32,
    pub monitor_active: bool,
    pub recommender_active: bool,
}
