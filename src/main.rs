//! locate-server entry point

use anyhow::{Context, Result};
use clap::Parser;
use locate_server::{
    config,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Serve `locate` results over HTTP
#[derive(Parser, Debug)]
#[command(name = "locate-server", version, about)]
struct Cli {
    /// Path to a YAML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// HTTP server port [default: 8080]
    #[arg(long)]
    port: Option<u16>,

    /// HTTP server address; empty listens on all interfaces
    #[arg(long)]
    address: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting locate-server v{}", locate_server::VERSION);

    // Settings are final once flags are applied
    let mut settings = config::load(cli.config.as_deref())?;
    settings.apply_overrides(cli.port, cli.address);
    info!("Using locate command: {}", settings.locate.command);

    let listen_addr = settings.server.listen_addr();
    let listener = tokio::net::TcpListener::bind((
        settings.server.bind_host(),
        settings.server.port,
    ))
    .await
    .with_context(|| format!("failed to bind {}", listen_addr))?;

    let app = create_router(AppState::new(settings));

    info!("Listening on {}", listen_addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
