use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use weapon_warehouse::config::{CliArgs, DatabaseLocation, ServiceConfig};
use weapon_warehouse::logging::init_logging;
use weapon_warehouse::{http, SqliteWeaponStore, WeaponRepository};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::from_args(CliArgs::parse())?;
    config.validate()?;
    init_logging(&config.log_filter)?;

    let store = match &config.database {
        DatabaseLocation::Memory => {
            tracing::warn!("using a transient in-memory database");
            SqliteWeaponStore::open_in_memory().context("failed to open in-memory database")?
        }
        DatabaseLocation::File(path) => {
            tracing::info!(path = %path.display(), "opening weapon database");
            SqliteWeaponStore::open(path)
                .with_context(|| format!("failed to open database {}", path.display()))?
        }
    };

    let repository = Arc::new(WeaponRepository::new(store));
    http::serve_with_shutdown(repository.clone(), config.bind, shutdown_signal())
        .await
        .with_context(|| format!("failed to serve on {}", config.bind))?;

    match Arc::try_unwrap(repository) {
        Ok(repository) => repository
            .into_store()
            .close()
            .context("failed to close database")?,
        Err(_) => tracing::warn!("repository still shared at shutdown; database left to drop"),
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
