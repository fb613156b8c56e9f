//! Astro Daemon - astrology content API
//!
//! Serves AI-generated content with deterministic fallbacks.

use anyhow::Result;
use astrod::config::Config;
use astrod::server::{self, AppState};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "astrod", version, about = "Astrology content daemon")]
struct Args {
    /// Config file (defaults to /etc/astro/config.toml)
    #[arg(short, long, env = "ASTRO_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address, overrides [server] bind
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    info!("Astro Daemon v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::load(args.config.as_deref())?;
    let bind = args.bind.unwrap_or_else(|| config.server.bind.clone());

    let state = AppState::from_config(&config).await?;
    server::run(state, &bind).await
}
