//! Process-wide tracing subscriber.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install a formatted subscriber. `RUST_LOG` takes precedence over
/// `default_filter`. Fails if a global subscriber is already set.
pub fn init_logging(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(default_filter)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {}", e))
}

fn parse_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .map_err(|e| anyhow!("invalid log filter {:?}: {}", directives, e))
}
