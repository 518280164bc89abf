//! Single-coach railway reservation engine - entry point.

use anyhow::Result;
use clap::Parser;
use tracing::info;

/// Single-coach railway reservation engine.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via RAIL_CONFIG env var).
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    coach_telemetry::init_logging()?;
    info!("starting coach-server v{}", env!("CARGO_PKG_VERSION"));

    let config = coach_server::AppConfig::load(args.config)?;
    info!(waiting_capacity = config.waiting_capacity, "configuration loaded");

    let app = coach_server::Application::new(config)?;
    app.run().await?;

    Ok(())
}
