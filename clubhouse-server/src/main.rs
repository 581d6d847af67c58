//! # Clubhouse Server
//!
//! Entry point: load configuration, seed the activity directory, and serve
//! the HTTP API until Ctrl-C.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use clubhouse_server::{
    AppState, create_app,
    infra::{
        config::{ConfigLoad, ConfigLoader},
        startup::{build_directory, init_tracing, log_config_warnings},
    },
};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "clubhouse-server")]
#[command(about = "Serve the extracurricular activity directory over HTTP")]
struct Cli {
    /// Server port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Path to a clubhouse.toml configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Activity seed file (TOML or JSON) replacing the built-in activities
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Dotenv file to load instead of `.env`
    #[arg(long)]
    env_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = cli.config.clone() {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = cli.env_file.clone() {
        loader = loader.with_env_file(path);
    }
    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(seed) = cli.seed {
        config.directory.seed_path = Some(seed);
    }

    init_tracing();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "configuration file loaded");
    }
    log_config_warnings(&warnings);

    let directory = build_directory(&config)?;

    let addr = config.bind_address();
    let state = AppState::new(directory, config);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(addr = %listener.local_addr()?, "Clubhouse server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Clubhouse server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
