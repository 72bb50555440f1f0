//! One-shot queries against the dashboard API.

use crate::render;
use anyhow::bail;
use log::info;
use zc_core::client::ApiClient;
use zc_core::cycle::{run_cycle, CycleGuard, DashboardState};
use zc_core::endpoints::HISTORY_HOURS;
use zc_core::source::DashboardSource;

/// Run a single fetch cycle and print the dashboard.
///
/// Exits with an error if the backend could not be reached at all.
pub async fn run_status(client: &ApiClient) -> anyhow::Result<()> {
    let mut state = DashboardState::new();
    let report = run_cycle(client, &mut state, &CycleGuard::default(), HISTORY_HOURS).await;
    info!("Status cycle against {}: {:?}", client.base_url(), report);

    println!("{}", render::render_dashboard(&state));
    if let Some(error) = &state.error {
        bail!("{}", error);
    }
    Ok(())
}

/// Print the last `hours` of history.
pub async fn run_history(client: &ApiClient, hours: u32) -> anyhow::Result<()> {
    let history = client.fetch_history(hours).await?.unwrap_or_default();
    info!("Fetched {} history points ({}h)", history.len(), hours);
    println!("{}", render::render_history(&history));
    Ok(())
}

/// Print recommendations for the current reading.
pub async fn run_recommend(client: &ApiClient, team_context: Option<&str>) -> anyhow::Result<()> {
    match client.fetch_recommendations(team_context).await? {
        Some(set) => println!("{}", render::render_recommendations(&set)),
        None => println!("{}", zc_core::recommendations::UNAVAILABLE_MESSAGE),
    }
    Ok(())
}

/// Print the backend health report.
pub async fn run_health(client: &ApiClient) -> anyhow::Result<()> {
    let health = client.health().await?;
    println!("{}", render::render_health(&health));
    if health.status != "healthy" {
        bail!("backend reports status '{}'", health.status);
    }
    Ok(())
}
