//! Curator AI Dashboard
//!
//! Polls the Zc backend and shows the current reading, its 7-day history,
//! summary statistics and AI recommendations.
//!
//! Data flow:
//! 1. On mount, a polling future starts a fetch cycle immediately and then
//!    every 60 seconds. Each new cycle cancels the previous one if it is
//!    still in flight.
//! 2. A cycle fetches current -> history -> stats and writes each result into
//!    the `AppState` signals as it arrives.
//! 3. Panels are pure renderers of those signals; the recommendations panel
//!    fetches its own data whenever the current reading changes.

use dioxus::core::Task;
use dioxus::prelude::*;
use zc_core::config::DashboardConfig;
use zc_core::cycle::{run_cycle, CycleGuard, Screen};
use zc_dashboard_ui::components::{
    ConnectionError, CurrentStatus, HistoryChart, LoadingSpinner, Panel, Recommendations,
    StatsPanel,
};
use zc_dashboard_ui::state::AppState;
use zc_dashboard_ui::web_fetch::{self, WebSource};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("zc-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let config = use_context_provider(DashboardConfig::default);

    // ─── Polling loop: runs until the component unmounts ───
    use_future(move || {
        let config = config.clone();
        async move {
            let guard = CycleGuard::default();
            let mut in_flight: Option<Task> = None;
            loop {
                // Single in-flight cycle: a slow cycle never overlaps the next one
                if let Some(task) = in_flight.take() {
                    task.cancel();
                }
                let guard = guard.clone();
                let source = WebSource::new(config.api_base.clone());
                let hours = config.history_hours;
                in_flight = Some(spawn(async move {
                    let mut sink = state;
                    run_cycle(&source, &mut sink, &guard, hours).await;
                }));
                web_fetch::sleep(config.poll_interval).await;
            }
        }
    });

    // ─── Render ───
    let body = match state.screen() {
        Screen::Loading => rsx! { LoadingSpinner {} },
        Screen::ConnectionError(message) => rsx! { ConnectionError { message } },
        Screen::Ready => rsx! { Dashboard {} },
    };

    rsx! {
        div {
            class: "App",
            style: "max-width: 1200px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            {body}
        }
    }
}

/// The four panels plus header and footer.
#[component]
fn Dashboard() -> Element {
    let state = use_context::<AppState>();
    let current = state.current.read().clone();
    let history = state.history.read().clone();
    let stats = state.stats.read().clone();

    rsx! {
        header {
            class: "App-header",
            style: "text-align: center; margin-bottom: 16px;",
            h1 { style: "margin: 0;", "🎯 Curator AI Dashboard" }
            p { class: "tagline", style: "margin: 4px 0 0 0; color: #666;", "Real-time Cognitive Impedance Monitoring" }
        }

        div {
            class: "dashboard-grid",
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(360px, 1fr)); gap: 16px;",

            Panel {
                title: "Current Status".to_string(),
                class: "panel-main".to_string(),
                CurrentStatus { current }
            }

            Panel {
                title: "7-Day Statistics".to_string(),
                class: "panel-stats".to_string(),
                if let Some(stats) = stats {
                    StatsPanel { stats }
                }
            }

            Panel {
                title: "Zc History (Last 7 Days)".to_string(),
                class: "panel-chart".to_string(),
                HistoryChart { data: history }
            }

            Panel {
                title: "AI Recommendations".to_string(),
                class: "panel-recommendations".to_string(),
                Recommendations {}
            }
        }

        footer {
            class: "App-footer",
            style: "text-align: center; font-size: 12px; color: #888; margin-top: 16px;",
            p { "CIM Pattern v3.0 | Curator AI Dashboard" }
            p {
                a {
                    href: "https://github.com/pyragogy/protocols",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Documentation"
                }
            }
        }
    }
}
