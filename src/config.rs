//! Service configuration: command line and environment over an optional
//! TOML file over defaults.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

const DEFAULT_BIND: &str = "127.0.0.1:5000";
const DEFAULT_DATABASE: &str = "weapons.sqlite";
const DEFAULT_LOG_FILTER: &str = "weapon_warehouse=info";
const IN_MEMORY: &str = ":memory:";

#[derive(Debug, Default, Parser)]
#[command(name = "weapon-warehouse", version, about = "Weapon record service over HTTP")]
pub struct CliArgs {
    /// TOML file with `bind`, `database`, and `log` keys.
    #[arg(long, env = "WEAPON_WAREHOUSE_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Address to listen on.
    #[arg(long, env = "WEAPON_WAREHOUSE_BIND", value_name = "ADDR")]
    pub bind: Option<SocketAddr>,

    /// SQLite database file, or `:memory:` for a transient database.
    #[arg(long, env = "WEAPON_WAREHOUSE_DATABASE", value_name = "PATH")]
    pub database: Option<String>,

    /// Log filter directives, e.g. `weapon_warehouse=debug`. RUST_LOG wins.
    #[arg(long = "log", env = "WEAPON_WAREHOUSE_LOG", value_name = "FILTER")]
    pub log_filter: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    bind: Option<SocketAddr>,
    database: Option<String>,
    log: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    Memory,
    File(PathBuf),
}

impl DatabaseLocation {
    fn parse(raw: &str) -> Self {
        if raw == IN_MEMORY {
            DatabaseLocation::Memory
        } else {
            DatabaseLocation::File(PathBuf::from(raw))
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind: SocketAddr,
    pub database: DatabaseLocation,
    pub log_filter: String,
}

impl ServiceConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            config,
            bind: cli_bind,
            database: cli_database,
            log_filter: cli_log_filter,
        } = args;

        let file_config = match config.as_ref() {
            Some(path) => load_config_file(path)?,
            None => PartialConfig::default(),
        };

        let PartialConfig {
            bind: file_bind,
            database: file_database,
            log: file_log_filter,
        } = file_config;

        let bind = match cli_bind.or(file_bind) {
            Some(bind) => bind,
            None => DEFAULT_BIND
                .parse()
                .context("default bind address is invalid")?,
        };

        let database = cli_database
            .or(file_database)
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let log_filter = cli_log_filter
            .or(file_log_filter)
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            bind,
            database: DatabaseLocation::parse(database.trim()),
            log_filter,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if let DatabaseLocation::File(path) = &self.database {
            anyhow::ensure!(
                !path.as_os_str().is_empty(),
                "database path must not be empty"
            );
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                anyhow::ensure!(
                    parent.is_dir(),
                    "database directory {:?} does not exist",
                    parent
                );
            }
        }
        anyhow::ensure!(
            !self.log_filter.trim().is_empty(),
            "log filter must not be empty"
        );
        Ok(())
    }
}

fn load_config_file(path: &Path) -> Result<PartialConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {:?}", path))?;
    toml::from_str(&contents).with_context(|| format!("failed to parse config file {:?}", path))
}
