//! Task API server
//!
//! Serves task CRUD over HTTP/JSON backed by SQLite.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use task_api::api::{AppState, build_router, start_server};
use task_api::cli::Cli;
use task_api::config::ConfigLoader;
use task_api::db::Database;
use task_api::logging;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log, cli.verbose)?;

    let loader = ConfigLoader::load(cli.config.as_deref())?;
    for (tier, path) in loader.sources() {
        debug!(tier = %tier, path = %path.display(), "Merged config file");
    }
    if let Some(path) = loader.config_path() {
        info!(path = %path.display(), "Configuration loaded");
    }
    let mut config = loader.into_config();
    cli.apply_overrides(&mut config);

    let db = if config.is_in_memory_db() {
        Database::open_in_memory()?
    } else {
        config.ensure_db_dir()?;
        Database::open(&config.server.db_path)?
    };
    info!(db_path = %config.server.db_path.display(), "Database ready");

    let state = AppState::new(Arc::new(db));
    let router = build_router(state, &config.http);
    let handle = start_server(router, &config.server.host, config.server.port).await?;

    info!(
        addr = %handle.local_addr(),
        cors = config.http.cors,
        "task-api v{} started",
        env!("CARGO_PKG_VERSION")
    );

    tokio::signal::ctrl_c().await?;
    info!("Shutdown requested");
    handle.shutdown().await;

    Ok(())
}
