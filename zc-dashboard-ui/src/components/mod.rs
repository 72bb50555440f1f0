//! Reusable Dioxus RSX components for the Zc dashboard.

mod connection_error;
mod current_status;
mod history_chart;
mod loading_spinner;
mod panel;
mod recommendations;
mod stats_panel;
mod zc_gauge;

pub use connection_error::ConnectionError;
pub use current_status::CurrentStatus;
pub use history_chart::HistoryChart;
pub use loading_spinner::LoadingSpinner;
pub use panel::Panel;
pub use recommendations::Recommendations;
pub use stats_panel::StatsPanel;
pub use zc_gauge::ZcGauge;
