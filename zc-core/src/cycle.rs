//! The polling fetch cycle.
//!
//! A cycle requests the current reading, the history and the summary, in that
//! order, writing each successful response into a [`CycleSink`] as soon as it
//! arrives. [`CycleGuard`] keeps at most one cycle live: starting a cycle
//! supersedes the previous one, whose late responses are discarded and whose
//! remaining requests are never issued.

use crate::error::ZcError;
use crate::model::{CurrentReading, HistoryPoint, SummaryStats};
use crate::source::DashboardSource;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Generic message shown when a cycle fails before any data has loaded.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch data. Is the API running?";

/// Setup hint shown under the connection error.
pub const SETUP_HINT: &str = "Make sure the backend API is running on port 8000:";

/// Command shown with [`SETUP_HINT`].
pub const SETUP_COMMAND: &str = "python tools/dashboard/backend/api.py";

/// Receives the results of a fetch cycle.
///
/// Each write replaces the whole value; there are no partial updates.
pub trait CycleSink {
    fn set_loading(&mut self, loading: bool);
    fn set_current(&mut self, reading: CurrentReading);
    fn set_history(&mut self, history: Vec<HistoryPoint>);
    fn set_stats(&mut self, stats: SummaryStats);
    fn set_error(&mut self, error: Option<String>);
}

/// Identifies one cycle issued by a [`CycleGuard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleTicket(u64);

/// Single-in-flight guard shared between the scheduler and running cycles.
#[derive(Debug, Clone, Default)]
pub struct CycleGuard {
    generation: Arc<AtomicU64>,
}

impl CycleGuard {
    /// Start a new cycle, superseding any cycle still running.
    pub fn begin(&self) -> CycleTicket {
        CycleTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: CycleTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }
}

/// How a cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleReport {
    /// Every request completed (non-OK statuses included)
    Refreshed,
    /// A request failed; the rest of the sequence was skipped
    Failed,
    /// A newer cycle started while this one was in flight
    Superseded,
}

/// Run one fetch cycle against `source`.
pub async fn run_cycle<S, K>(
    source: &S,
    sink: &mut K,
    guard: &CycleGuard,
    history_hours: u32,
) -> CycleReport
where
    S: DashboardSource + ?Sized,
    K: CycleSink + ?Sized,
{
    let ticket = guard.begin();
    sink.set_loading(true);

    let outcome = fetch_sequence(source, sink, guard, ticket, history_hours).await;
    if !guard.is_current(ticket) {
        log::debug!("fetch cycle superseded by a newer cycle");
        return CycleReport::Superseded;
    }

    let report = match outcome {
        Ok(()) => {
            sink.set_error(None);
            CycleReport::Refreshed
        }
        Err(e) => {
            log::error!("Dashboard refresh failed: {}", e);
            sink.set_error(Some(FETCH_ERROR_MESSAGE.to_string()));
            CycleReport::Failed
        }
    };
    sink.set_loading(false);
    report
}

/// Current, then history, then stats. Stops early once superseded.
async fn fetch_sequence<S, K>(
    source: &S,
    sink: &mut K,
    guard: &CycleGuard,
    ticket: CycleTicket,
    history_hours: u32,
) -> Result<(), ZcError>
where
    S: DashboardSource + ?Sized,
    K: CycleSink + ?Sized,
{
    let current = source.fetch_current().await?;
    if !guard.is_current(ticket) {
        return Ok(());
    }
    if let Some(current) = current {
        sink.set_current(current);
    }

    let history = source.fetch_history(history_hours).await?;
    if !guard.is_current(ticket) {
        return Ok(());
    }
    if let Some(history) = history {
        sink.set_history(history);
    }

    let stats = source.fetch_stats().await?;
    if !guard.is_current(ticket) {
        return Ok(());
    }
    if let Some(stats) = stats {
        sink.set_stats(stats);
    }
    Ok(())
}

/// What the dashboard shows as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// First load, nothing to show yet
    Loading,
    /// Failed with no prior data
    ConnectionError(String),
    /// Panels are rendered (possibly with stale data)
    Ready,
}

impl Screen {
    /// Once a current reading exists, loads and errors no longer replace the
    /// panels.
    pub fn resolve(loading: bool, error: Option<&str>, has_current: bool) -> Self {
        if has_current {
            return Screen::Ready;
        }
        if loading {
            return Screen::Loading;
        }
        match error {
            Some(message) => Screen::ConnectionError(message.to_string()),
            None => Screen::Ready,
        }
    }
}

/// Plain in-memory dashboard state, used by the CLI and in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub current: Option<CurrentReading>,
    pub history: Vec<HistoryPoint>,
    pub stats: Option<SummaryStats>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    /// Initial state: loading, nothing fetched.
    pub fn new() -> Self {
        Self {
            current: None,
            history: Vec::new(),
            stats: None,
            loading: true,
            error: None,
        }
    }

    pub fn screen(&self) -> Screen {
        Screen::resolve(self.loading, self.error.as_deref(), self.current.is_some())
    }
}

impl CycleSink for DashboardState {
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn set_current(&mut self, reading: CurrentReading) {
        self.current = Some(reading);
    }

    fn set_history(&mut self, history: Vec<HistoryPoint>) {
        self.history = history;
    }

    fn set_stats(&mut self, stats: SummaryStats) {
        self.stats = Some(stats);
    }

    fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::model::{RecommendationSet, ZoneDistribution};
    use crate::zone::Zone;
    use std::cell::{Cell, RefCell};

    #[derive(Clone, Copy, PartialEq)]
    enum Reply {
        Ok,
        NotOk,
        Fail,
    }

    struct ScriptedSource {
        current: Reply,
        history: Reply,
        stats: Reply,
        zc: f64,
        calls: RefCell<Vec<&'static str>>,
        /// Starts a newer cycle on this guard while `fetch_current` is in flight
        interrupt: Option<CycleGuard>,
    }

    impl ScriptedSource {
        fn new(current: Reply, history: Reply, stats: Reply) -> Self {
            Self {
                current,
                history,
                stats,
                zc: 0.55,
                calls: RefCell::new(Vec::new()),
                interrupt: None,
            }
        }

        fn reply<T>(&self, name: &'static str, reply: Reply, value: T) -> Result<Option<T>> {
            self.calls.borrow_mut().push(name);
            match reply {
                Reply::Ok => Ok(Some(value)),
                Reply::NotOk => Ok(None),
                Reply::Fail => Err(ZcError::Request(format!("{} unreachable", name))),
            }
        }
    }

    fn reading(zc: f64) -> CurrentReading {
        CurrentReading {
            timestamp: None,
            zc,
            v_generation: None,
            b_social: None,
            zone: Zone::Green,
            mode: "Mode A: Study Hall".to_string(),
            trend: "STABLE".to_string(),
            confidence: 0.9,
            recommendation: "Continue with async workflows.".to_string(),
        }
    }

    fn history(zc: f64) -> Vec<HistoryPoint> {
        vec![HistoryPoint {
            timestamp: "2024-01-15T10:00:00".to_string(),
            zc,
            zone: Zone::Green,
        }]
    }

    fn stats(zc: f64) -> SummaryStats {
        SummaryStats {
            current_zc: zc,
            avg_zc: zc,
            current_zone: Zone::Green,
            trend: "STABLE".to_string(),
            zone_distribution: ZoneDistribution {
                green: 1,
                yellow: 0,
                red: 0,
            },
            data_points: 1,
        }
    }

    impl DashboardSource for ScriptedSource {
        async fn fetch_current(&self) -> Result<Option<CurrentReading>> {
            if let Some(guard) = &self.interrupt {
                guard.begin();
            }
            self.reply("current", self.current, reading(self.zc))
        }

        async fn fetch_history(&self, hours: u32) -> Result<Option<Vec<HistoryPoint>>> {
            assert_eq!(hours, 168);
            self.reply("history", self.history, history(self.zc))
        }

        async fn fetch_stats(&self) -> Result<Option<SummaryStats>> {
            self.reply("stats", self.stats, stats(self.zc))
        }

        async fn fetch_recommendations(
            &self,
            _team_context: Option<&str>,
        ) -> Result<Option<RecommendationSet>> {
            Ok(None)
        }
    }

    /// Sink that counts writes.
    #[derive(Default)]
    struct CountingSink {
        state: DashboardState,
        writes: Cell<usize>,
    }

    impl CycleSink for CountingSink {
        fn set_loading(&mut self, loading: bool) {
            self.state.set_loading(loading);
        }
        fn set_current(&mut self, reading: CurrentReading) {
            self.writes.set(self.writes.get() + 1);
            self.state.set_current(reading);
        }
        fn set_history(&mut self, history: Vec<HistoryPoint>) {
            self.writes.set(self.writes.get() + 1);
            self.state.set_history(history);
        }
        fn set_stats(&mut self, stats: SummaryStats) {
            self.writes.set(self.writes.get() + 1);
            self.state.set_stats(stats);
        }
        fn set_error(&mut self, error: Option<String>) {
            self.state.set_error(error);
        }
    }

    #[test]
    fn test_initial_screen_is_loading() {
        assert_eq!(DashboardState::new().screen(), Screen::Loading);
    }

    #[tokio::test]
    async fn test_successful_cycle_replaces_everything() {
        let source = ScriptedSource::new(Reply::Ok, Reply::Ok, Reply::Ok);
        let mut state = DashboardState::new();
        let report = run_cycle(&source, &mut state, &CycleGuard::default(), 168).await;

        assert_eq!(report, CycleReport::Refreshed);
        assert_eq!(state.current, Some(reading(0.55)));
        assert_eq!(state.history, history(0.55));
        assert_eq!(state.stats, Some(stats(0.55)));
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.screen(), Screen::Ready);
        assert_eq!(*source.calls.borrow(), vec!["current", "history", "stats"]);
    }

    #[tokio::test]
    async fn test_non_ok_status_is_no_update() {
        let guard = CycleGuard::default();
        let mut state = DashboardState::new();
        run_cycle(&ScriptedSource::new(Reply::Ok, Reply::Ok, Reply::Ok), &mut state, &guard, 168).await;

        let mut source = ScriptedSource::new(Reply::NotOk, Reply::Ok, Reply::NotOk);
        source.zc = 1.4;
        let report = run_cycle(&source, &mut state, &guard, 168).await;

        assert_eq!(report, CycleReport::Refreshed);
        assert_eq!(state.current, Some(reading(0.55)));
        assert_eq!(state.history, history(1.4));
        assert_eq!(state.stats, Some(stats(0.55)));
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_failure_without_data_shows_connection_error() {
        let source = ScriptedSource::new(Reply::Fail, Reply::Ok, Reply::Ok);
        let mut state = DashboardState::new();
        let report = run_cycle(&source, &mut state, &CycleGuard::default(), 168).await;

        assert_eq!(report, CycleReport::Failed);
        assert_eq!(*source.calls.borrow(), vec!["current"]);
        assert_eq!(
            state.screen(),
            Screen::ConnectionError(FETCH_ERROR_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn test_failure_after_data_leaves_state_unchanged() {
        let guard = CycleGuard::default();
        let mut state = DashboardState::new();
        run_cycle(&ScriptedSource::new(Reply::Ok, Reply::Ok, Reply::Ok), &mut state, &guard, 168).await;
        let before = (state.current.clone(), state.history.clone(), state.stats.clone());

        let mut failing = ScriptedSource::new(Reply::Fail, Reply::Fail, Reply::Fail);
        failing.zc = 1.9;
        let report = run_cycle(&failing, &mut state, &guard, 168).await;

        assert_eq!(report, CycleReport::Failed);
        assert_eq!((state.current.clone(), state.history.clone(), state.stats.clone()), before);
        assert!(!state.loading);
        assert_eq!(state.screen(), Screen::Ready);
    }

    #[tokio::test]
    async fn test_failure_mid_sequence_keeps_earlier_updates() {
        let source = ScriptedSource::new(Reply::Ok, Reply::Fail, Reply::Ok);
        let mut state = DashboardState::new();
        let report = run_cycle(&source, &mut state, &CycleGuard::default(), 168).await;

        assert_eq!(report, CycleReport::Failed);
        assert_eq!(state.current, Some(reading(0.55)));
        assert!(state.history.is_empty());
        assert_eq!(state.stats, None);
        assert_eq!(*source.calls.borrow(), vec!["current", "history"]);
        assert_eq!(state.screen(), Screen::Ready);
    }

    #[tokio::test]
    async fn test_superseded_cycle_writes_nothing() {
        let guard = CycleGuard::default();
        let mut source = ScriptedSource::new(Reply::Ok, Reply::Ok, Reply::Ok);
        source.interrupt = Some(guard.clone());
        let mut sink = CountingSink::default();

        let report = run_cycle(&source, &mut sink, &guard, 168).await;

        assert_eq!(report, CycleReport::Superseded);
        assert_eq!(sink.writes.get(), 0);
        // The stale cycle stops issuing requests
        assert_eq!(*source.calls.borrow(), vec!["current"]);
    }

    #[test]
    fn test_guard_tickets() {
        let guard = CycleGuard::default();
        let first = guard.begin();
        assert!(guard.is_current(first));
        let second = guard.clone().begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }
}
