//! Zatrust demo server.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client Request
//!   ─────────────▶ request ID ─▶ trace ─▶ timeout ─▶ body limit ─▶ security headers
//!                                                                        │
//!                                                                        ▼
//!                                                              ┌──────────────────┐
//!                                                              │   access gate    │
//!                                                              │ (protected path, │
//!                                                              │  session cookie) │
//!                                                              └───┬─────────┬────┘
//!                                                          Allow   │         │ RedirectToLogin
//!                                                                  ▼         ▼
//!                                                            handlers     302 /login?from=…
//!                                                   (pages, login, logout)
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use zatrust::config::resolve_config;
use zatrust::http::HttpServer;
use zatrust::lifecycle::{signals, Shutdown};
use zatrust::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "zatrust")]
#[command(about = "Minimal cookie-session demo web service", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = resolve_config(cli.config.as_deref(), cli.bind.as_deref())?;

    logging::init_logging(&config.observability, config.environment)?;

    tracing::info!(
        name = %config.app.name,
        version = %config.app.version,
        environment = ?config.environment,
        "zatrust starting"
    );
    tracing::info!(
        bind_address = %config.listener.bind_address,
        protected_prefixes = ?config.auth.protected_prefixes,
        cookie_secure = config.cookie_secure(),
        tls = config.listener.tls.is_some(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let shutdown = Shutdown::new();
    let _signals = signals::spawn_signal_watcher(shutdown.clone());

    let use_tls = config.listener.tls.is_some();
    let bind_address = config.listener.bind_address.clone();
    let server = HttpServer::new(config);

    if use_tls {
        server.run_tls(shutdown).await?;
    } else {
        let listener = TcpListener::bind(&bind_address).await?;
        tracing::info!(address = %listener.local_addr()?, "Listening for connections");
        server.run(listener, shutdown).await?;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
