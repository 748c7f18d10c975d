//! MindWatch API server
//!
//! # Usage
//!
//! ```bash
//! # Defaults, layered with config/default.toml and MINDWATCH__* variables
//! mindwatch-api
//!
//! # Explicit config file
//! mindwatch-api --config /path/to/config.toml
//!
//! # Custom bind address and port
//! mindwatch-api --bind 127.0.0.1 --port 9000
//!
//! # Debug logging
//! RUST_LOG=debug mindwatch-api
//! ```
//!
//! # Priority
//!
//! CLI arguments > Environment variables > Config file > Defaults
//! - `--port` overrides `MINDWATCH_PORT`, `http.port`
//! - `--bind` overrides `MINDWATCH_BIND_ADDRESS`, `http.bind_address`

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use mindwatch_api::server::{router, AppState};
use mindwatch_api::telemetry::init_tracing;
use mindwatch_core::Config;
use mindwatch_fusion::InferenceService;

#[derive(Debug, Parser)]
#[command(name = "mindwatch-api", version, about = "MindWatch stress inference API")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Bind address
    #[arg(long, value_name = "ADDRESS")]
    bind: Option<String>,

    /// Listen port
    #[arg(long)]
    port: Option<u16>,
}

/// Apply CLI and environment overrides. Called before validation.
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.http.port = port;
    } else if let Ok(port_str) = env::var("MINDWATCH_PORT") {
        match port_str.parse::<u16>() {
            Ok(port) => {
                info!("ENV override: port = {}", port);
                config.http.port = port;
            }
            Err(_) => warn!("Ignoring invalid MINDWATCH_PORT='{}'", port_str),
        }
    }

    if let Some(ref bind) = cli.bind {
        info!("CLI override: bind_address = {}", bind);
        config.http.bind_address = bind.clone();
    } else if let Ok(bind) = env::var("MINDWATCH_BIND_ADDRESS") {
        info!("ENV override: bind_address = {}", bind);
        config.http.bind_address = bind;
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => Config::from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => Config::load().context("failed to load configuration")?,
    };

    init_tracing(&config.logging)?;
    info!("{} {} starting", config.server.name, config.server.version);

    apply_overrides(&mut config, &cli);
    config.validate()?;

    let service = InferenceService::from_config(&config)?;
    info!(
        weights = ?config.fusion,
        encoders = ?service.encoders(),
        "Inference service ready"
    );

    let state = AppState::new(service, config.server.clone(), config.http.enforce_consent);
    let app = router(state, &config.http)?;

    let addr = config.http.socket_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}
