//! Zc CLI - Command line view of the Curator AI dashboard.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "zc-cli",
    version,
    about = "Cognitive impedance (Zc) dashboard in the terminal"
)]
struct Cli {
    /// Base URL of the dashboard backend
    #[arg(long, env = "ZC_API_URL", default_value = zc_cmd::DEFAULT_API_URL, global = true)]
    api_url: String,

    #[command(subcommand)]
    command: zc_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Using API at {}", cli.api_url);
    zc_cmd::run(&cli.api_url, cli.command).await
}
