//! Abstraction over where dashboard data comes from.

use crate::error::Result;
use crate::model::{CurrentReading, HistoryPoint, RecommendationSet, SummaryStats};

/// A backend the dashboard can poll.
///
/// Each method resolves to:
/// - `Ok(Some(_))` for an OK response with a decodable body,
/// - `Ok(None)` for a non-OK status (no update this cycle),
/// - `Err(_)` for transport or decode failures.
///
/// Implemented by the native reqwest client and the browser fetch bridge.
/// Futures are not required to be `Send`; the web implementation is
/// single-threaded.
#[allow(async_fn_in_trait)]
pub trait DashboardSource {
    async fn fetch_current(&self) -> Result<Option<CurrentReading>>;

    async fn fetch_history(&self, hours: u32) -> Result<Option<Vec<HistoryPoint>>>;

    async fn fetch_stats(&self) -> Result<Option<SummaryStats>>;

    async fn fetch_recommendations(
        &self,
        team_context: Option<&str>,
    ) -> Result<Option<RecommendationSet>>;
}
