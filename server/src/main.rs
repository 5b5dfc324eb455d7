use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use parley_api::{build_router, AppState, PresenceReaper};

#[derive(Debug, Parser)]
#[command(name = "parley-server", about = "Chat-room backend with presence reaping")]
struct Cli {
    /// Path to a configuration file, overriding discovery and PARLEY_CONFIG.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(path) = cli.config {
        std::env::set_var("PARLEY_CONFIG", path);
    }

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(env_filter)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("starting parley backend");

    let config = parley_config::load().context("failed to load configuration")?;

    let db_pool = parley_database::initialize_database(&config.database)
        .await
        .context("failed to initialize database")?;

    // The reaper shares the pool with request handlers and nothing else.
    let reaper_task = PresenceReaper::new(db_pool.clone(), &config.presence).spawn();

    let app = build_router(AppState::new(db_pool));

    let address = format!("{}:{}", config.http.address, config.http.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind http listener on {address}"))?;

    info!(%address, "http server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server error")?;

    reaper_task.abort();
    info!("backend shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!(?error, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received");
}
