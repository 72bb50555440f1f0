//! Dashboard configuration.

use crate::endpoints::HISTORY_HOURS;
use std::time::Duration;

/// Interval between fetch cycles.
pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Settings shared by the web dashboard and the `watch` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Prefix for every endpoint path; empty means same origin.
    pub api_base: String,
    pub poll_interval: Duration,
    pub history_hours: u32,
    /// Passed to `/api/recommendations` for personalised advice.
    pub team_context: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            poll_interval: POLL_INTERVAL,
            history_hours: HISTORY_HOURS,
            team_context: None,
        }
    }
}

impl DashboardConfig {
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }
}
