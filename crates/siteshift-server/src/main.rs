//! siteshift server binary

use anyhow::Context;
use clap::{value_parser, Arg, Command};
use siteshift_server::{router, AppState, ServerConfig, CRATE_NAME};
use siteshift_store::{JsonFileStore, MemoryStore, Store};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Command::new(CRATE_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("HTTP service for the shared URL migration checklist")
        .arg(
            Arg::new("config")
                .long("config")
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("bind")
                .long("bind")
                .help("Socket address to listen on, e.g. 0.0.0.0:8080"),
        )
        .arg(
            Arg::new("data")
                .long("data")
                .value_parser(value_parser!(PathBuf))
                .help("JSON store file; omit to keep the checklist in memory"),
        );

    let matches = cli.get_matches();

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = matches.get_one::<String>("bind") {
        config.bind = bind.clone();
    }
    if let Some(data) = matches.get_one::<PathBuf>("data") {
        config.data = Some(data.clone());
    }

    let store = match &config.data {
        Some(path) => {
            info!("storing checklist at {}", path.display());
            Store::new(Arc::new(JsonFileStore::new(path.clone())))
        }
        None => {
            warn!("no data file configured; checklist is lost on shutdown");
            Store::new(Arc::new(MemoryStore::new()))
        }
    };

    let app = router(AppState::new(store));
    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!("{CRATE_NAME} listening on {}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(err) => {
            error!("failed to install ctrl-c handler: {err}");
            // Without a working signal handler the server just runs until
            // killed externally.
            std::future::pending::<()>().await;
        }
    }
}
