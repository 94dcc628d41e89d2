use anyhow::{Context, Result};
use clap::Parser;

use shortly::config::{self, StoreBackend};
use shortly::{server, telemetry};

/// URL shortener HTTP service.
#[derive(Parser)]
#[command(name = "shortly")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on (overrides LISTEN)
    #[arg(short, long)]
    listen: Option<String>,

    /// Record store backend (overrides STORE_BACKEND)
    #[arg(short, long, value_enum)]
    store: Option<StoreBackend>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::Config::from_env().context("Failed to load configuration")?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if let Some(store) = cli.store {
        config.store_backend = store;
    }
    config.validate().context("Invalid configuration")?;

    telemetry::init_tracing(&config.log_level, &config.log_format)?;
    config.print_summary();

    if let Err(e) = server::run(config).await {
        tracing::error!("Fatal: {:#}", e);
        return Err(e);
    }

    Ok(())
}
