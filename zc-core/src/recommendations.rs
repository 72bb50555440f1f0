//! Recommendations panel state machine.
//!
//! `Idle -> Loading -> {Loaded | Unavailable}`, re-entered whenever a new,
//! distinct current reading arrives.

use crate::error::ZcError;
use crate::model::{CurrentReading, RecommendationSet};

/// Shown while a recommendation fetch is in flight.
pub const LOADING_MESSAGE: &str = "Loading AI recommendations...";

/// Shown when there is nothing to display.
pub const UNAVAILABLE_MESSAGE: &str = "No recommendations available.";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RecommendationState {
    #[default]
    Idle,
    Loading,
    Loaded(RecommendationSet),
    Unavailable,
}

/// Handle for one recommendation fetch; completions carry it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationRequest(u64);

/// Decides when to fetch recommendations and records the outcome.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecommendationTracker {
    last_reading: Option<CurrentReading>,
    latest_request: u64,
    state: RecommendationState,
}

impl RecommendationTracker {
    pub fn state(&self) -> &RecommendationState {
        &self.state
    }

    /// Feed the latest current reading.
    ///
    /// Returns a request when a fetch must start: never for an absent reading,
    /// and once per distinct reading (compared by value).
    ///
    /// A poll that returns an identical reading does not refetch.
    pub fn observe(&mut self, current: Option<&CurrentReading>) -> Option<RecommendationRequest> {
        let current = current?;
        if self.last_reading.as_ref() == Some(current) {
            return None;
        }
        self.last_reading = Some(current.clone());
        self.latest_request += 1;
        self.state = RecommendationState::Loading;
        Some(RecommendationRequest(self.latest_request))
    }

    /// Record a fetch outcome. Returns `false` if `request` was superseded.
    pub fn complete(
        &mut self,
        request: RecommendationRequest,
        outcome: Result<Option<RecommendationSet>, ZcError>,
    ) -> bool {
        if request.0 != self.latest_request {
            log::debug!("dropping superseded recommendations response");
            return false;
        }
        self.state = match outcome {
            Ok(Some(set)) => RecommendationState::Loaded(set),
            Ok(None) => RecommendationState::Unavailable,
            Err(e) => {
                log::error!("Failed to fetch recommendations: {}", e);
                RecommendationState::Unavailable
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::Zone;

    fn reading(zc: f64) -> CurrentReading {
        CurrentReading {
            timestamp: Some("2024-01-15T10:30:00".to_string()),
            zc,
            v_generation: None,
            b_social: None,
            zone: Zone::Green,
            mode: "Mode A: Study Hall".to_string(),
            trend: "STABLE".to_string(),
            confidence: 0.9,
            recommendation: "Continue with async-first workflows.".to_string(),
        }
    }

    fn set(summary: &str) -> RecommendationSet {
        RecommendationSet {
            summary: summary.to_string(),
            immediate_actions: vec!["Protect focus time".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_no_fetch_without_reading() {
        let mut tracker = RecommendationTracker::default();
        assert!(tracker.observe(None).is_none());
        assert_eq!(tracker.state(), &RecommendationState::Idle);
    }

    #[test]
    fn test_loads_once_per_distinct_reading() {
        let mut tracker = RecommendationTracker::default();
        let first = reading(0.4);

        let request = tracker.observe(Some(&first)).unwrap();
        assert_eq!(tracker.state(), &RecommendationState::Loading);
        assert!(tracker.complete(request, Ok(Some(set("Healthy")))));
        assert_eq!(tracker.state(), &RecommendationState::Loaded(set("Healthy")));

        // Same reading polled again: no refetch
        assert!(tracker.observe(Some(&first.clone())).is_none());
        assert!(tracker.observe(None).is_none());
        assert_eq!(tracker.state(), &RecommendationState::Loaded(set("Healthy")));

        // New reading: exactly one more fetch
        let second = reading(0.75);
        let request = tracker.observe(Some(&second)).unwrap();
        assert!(tracker.observe(Some(&second)).is_none());
        assert!(tracker.complete(request, Ok(Some(set("Watch out")))));
        assert_eq!(tracker.state(), &RecommendationState::Loaded(set("Watch out")));
    }

    #[test]
    fn test_failure_renders_unavailable() {
        let mut tracker = RecommendationTracker::default();
        let request = tracker.observe(Some(&reading(1.2))).unwrap();
        let error = ZcError::Request("connection refused".to_string());
        assert!(tracker.complete(request, Err(error)));
        assert_eq!(tracker.state(), &RecommendationState::Unavailable);

        let request = tracker.observe(Some(&reading(1.3))).unwrap();
        assert!(tracker.complete(request, Ok(None)));
        assert_eq!(tracker.state(), &RecommendationState::Unavailable);
    }

    #[test]
    fn test_superseded_completion_is_ignored() {
        let mut tracker = RecommendationTracker::default();
        let stale = tracker.observe(Some(&reading(0.4))).unwrap();
        let fresh = tracker.observe(Some(&reading(0.5))).unwrap();

        assert!(!tracker.complete(stale, Ok(Some(set("old")))));
        assert_eq!(tracker.state(), &RecommendationState::Loading);
        assert!(tracker.complete(fresh, Ok(Some(set("new")))));
        assert_eq!(tracker.state(), &RecommendationState::Loaded(set("new")));
    }
}
