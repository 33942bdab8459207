//! # Rutero CLI
//!
//! Command-line entrypoint for the rutero route quoting server. Loads
//! configuration from the environment (a local `.env` is honored), then
//! serves the landing page and the `/ruta` endpoint.

use clap::Parser;
use log::info;

/// Command-line interface for rutero
#[derive(Parser)]
#[command(name = "rutero")]
#[command(about = "Route quoting server over the MapQuest Directions API")]
#[command(long_about = "Serves a route quoting API with fuel and toll cost estimates:
  rutero                           # Listen on 0.0.0.0:5000
  rutero --port 8080               # Custom port
  rutero --verbose                 # Debug logging

Configuration (environment or .env file):
  MAPQUEST_KEY                     # MapQuest API key (required for the landing page)
  MAPQUEST_URL                     # Directions endpoint override")]
#[command(version)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 5000)]
    port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenv::dotenv().ok();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    let config = rutero::Config::from_env();
    info!(
        "🦋 Rutero v{} starting (MapQuest key {})",
        env!("CARGO_PKG_VERSION"),
        if config.mapquest_key.is_some() {
            "configured"
        } else {
            "NOT configured"
        }
    );

    rutero::server::run_server(config, &cli.host, cli.port).await
}
