//! Terminal counterpart of the web dashboard's polling loop.

use crate::render;
use log::{info, warn};
use tokio::time::{Duration, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use zc_core::client::ApiClient;
use zc_core::config::DashboardConfig;
use zc_core::cycle::{run_cycle, CycleGuard, CycleReport, CycleSink, DashboardState, FETCH_ERROR_MESSAGE};
use zc_core::error::ZcError;
use zc_core::source::DashboardSource;

/// Cycles never outlive the interval that started them.
fn cycle_timeout(config: &DashboardConfig) -> Duration {
    config.poll_interval
}

/// Poll `source` every `config.poll_interval` until `cancel` fires or
/// `cycles` cycles have run, printing the dashboard after each one.
pub async fn run_watch<S: DashboardSource>(
    source: &S,
    config: &DashboardConfig,
    cycles: Option<usize>,
    cancel: CancellationToken,
) -> anyhow::Result<DashboardState> {
    let mut ticker = tokio::time::interval(config.poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let guard = CycleGuard::default();
    let mut state = DashboardState::new();
    let mut completed = 0usize;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let timeout = cycle_timeout(config);
                let cycle = run_cycle(source, &mut state, &guard, config.history_hours);
                // Shutdown must not wait for a slow cycle
                let outcome = tokio::select! {
                    outcome = tokio::time::timeout(timeout, cycle) => Some(outcome),
                    _ = cancel.cancelled() => None,
                };
                let Some(outcome) = outcome else {
                    info!("Watch loop shutting down mid-cycle");
                    state.set_loading(false);
                    break;
                };
                match outcome {
                    Ok(CycleReport::Failed) if state.current.is_some() => {
                        warn!("Fetch failed, keeping last dashboard");
                    }
                    Ok(report) => info!("Watch cycle {}: {:?}", completed + 1, report),
                    Err(_) => {
                        warn!("Watch cycle abandoned: {}", ZcError::Timeout(timeout));
                        state.set_loading(false);
                        if state.current.is_none() {
                            state.set_error(Some(FETCH_ERROR_MESSAGE.to_string()));
                        }
                    }
                }

                println!("{}", render::render_dashboard(&state));
                completed += 1;
                if cycles.is_some_and(|limit| completed >= limit) {
                    break;
                }
            }
            _ = cancel.cancelled() => {
                info!("Watch loop shutting down");
                break;
            }
        }
    }

    Ok(state)
}

/// [`run_watch`] against the API, stopped by Ctrl-C.
pub async fn run_watch_until_ctrl_c(
    client: &ApiClient,
    config: &DashboardConfig,
    cycles: Option<usize>,
) -> anyhow::Result<()> {
    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    let signal_task = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_signal.cancel();
        }
    });

    info!(
        "Watching {} every {}s",
        client.base_url(),
        config.poll_interval.as_secs()
    );
    let result = run_watch(client, config, cycles, cancel).await;
    signal_task.abort();
    result.map(|_| ())
}
