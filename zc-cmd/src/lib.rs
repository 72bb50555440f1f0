//! Command implementations for the Zc CLI.
//!
//! Provides one-shot queries against the dashboard API and a `watch`
//! command that polls it like the web dashboard does.

use clap::Subcommand;
use std::time::Duration;
use zc_core::client::ApiClient;
use zc_core::config::DashboardConfig;
use zc_core::endpoints::HISTORY_HOURS;

pub mod query;
pub mod render;
pub mod watch;

pub use zc_core::client::DEFAULT_API_URL;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch current reading, history and stats once and print the dashboard
    Status,

    /// Print the Zc history
    History {
        /// Hours of history to retrieve
        #[arg(long, default_value_t = HISTORY_HOURS)]
        hours: u32,
    },

    /// Print AI recommendations for the current reading
    Recommend {
        /// Team context for personalised advice
        #[arg(short = 'c', long)]
        team_context: Option<String>,
    },

    /// Check that the backend is up
    Health,

    /// Poll the backend and reprint the dashboard every interval (Ctrl-C to stop)
    Watch {
        /// Seconds between fetch cycles
        #[arg(short = 'i', long, default_value_t = 60)]
        interval_secs: u64,

        /// Stop after this many cycles
        #[arg(short = 'n', long)]
        cycles: Option<usize>,
    },
}

pub async fn run(api_url: &str, command: Command) -> anyhow::Result<()> {
    let client = ApiClient::new(api_url)?;
    match command {
        Command::Status => query::run_status(&client).await,
        Command::History { hours } => query::run_history(&client, hours).await,
        Command::Recommend { team_context } => {
            query::run_recommend(&client, team_context.as_deref()).await
        }
        Command::Health => query::run_health(&client).await,
        Command::Watch {
            interval_secs,
            cycles,
        } => {
            let config = DashboardConfig {
                poll_interval: Duration::from_secs(interval_secs.max(1)),
                ..DashboardConfig::with_api_base(api_url)
            };
            watch::run_watch_until_ctrl_c(&client, &config, cycles).await
        }
    }
}
