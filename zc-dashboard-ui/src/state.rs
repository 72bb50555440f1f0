//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The fetch cycle writes into it through its `CycleSink` impl.

use dioxus::prelude::*;
use zc_core::cycle::{CycleSink, Screen};
use zc_core::model::{CurrentReading, HistoryPoint, SummaryStats};
use zc_core::recommendations::RecommendationTracker;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Latest reading (None until the first successful fetch)
    pub current: Signal<Option<CurrentReading>>,
    /// Last 7 days of readings
    pub history: Signal<Vec<HistoryPoint>>,
    /// 7-day summary
    pub stats: Signal<Option<SummaryStats>>,
    /// Whether a fetch cycle is running
    pub loading: Signal<bool>,
    /// Error message from the last cycle, if it failed
    pub error_msg: Signal<Option<String>>,
    /// Recommendation fetch state for the current reading
    pub recommendations: Signal<RecommendationTracker>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            current: Signal::new(None),
            history: Signal::new(Vec::new()),
            stats: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            recommendations: Signal::new(RecommendationTracker::default()),
        }
    }

    /// Which top-level view to render. Subscribes the caller to the signals read.
    pub fn screen(&self) -> Screen {
        Screen::resolve(
            (self.loading)(),
            self.error_msg.read().as_deref(),
            self.current.read().is_some(),
        )
    }
}

impl CycleSink for AppState {
    fn set_loading(&mut self, loading: bool) {
        self.loading.set(loading);
    }

    fn set_current(&mut self, reading: CurrentReading) {
        self.current.set(Some(reading));
    }

    fn set_history(&mut self, history: Vec<HistoryPoint>) {
        self.history.set(history);
    }

    fn set_stats(&mut self, stats: SummaryStats) {
        self.stats.set(Some(stats));
    }

    fn set_error(&mut self, error: Option<String>) {
        self.error_msg.set(error);
    }
}
