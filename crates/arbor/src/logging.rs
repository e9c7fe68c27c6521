//! Logging
//!
//! Structured logging through the `tracing` crate. [`initialize`](crate::init::initialize)
//! installs the stderr subscriber below at the configured `log_level`; applications
//! that install their own subscriber first keep it.

use crate::error::{ArborError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding a tracing filter, e.g. `ARBOR_LOG=arbor=debug`.
pub const LOG_ENV: &str = "ARBOR_LOG";

/// Build the filter: `ARBOR_LOG` when set, otherwise `default_level`.
pub fn build_env_filter(default_level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }
    EnvFilter::try_new(default_level)
        .map_err(|e| ArborError::Config(format!("Invalid log level {:?}: {}", default_level, e)))
}

/// Install a stderr fmt subscriber.
///
/// Returns Ok without changes if a global subscriber is already installed.
pub fn init_logging(default_level: &str) -> Result<()> {
    let filter = build_env_filter(default_level)?;
    let installed = Registry::default()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init();
    if installed.is_err() {
        tracing::debug!("global subscriber already installed");
    }
    Ok(())
}
