//! Diagnostic logging to stderr; stdout stays reserved for command output.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global `tracing` subscriber.
///
/// # Errors
/// Returns error if the filter directive does not parse or a subscriber is
/// already installed.
pub fn init(filter: &str, color: bool) -> Result<()> {
    let filter = EnvFilter::try_new(filter).with_context(|| format!("Invalid log filter '{filter}'"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(color)
                .with_target(false),
        )
        .try_init()
        .context("Failed to install log subscriber")
}
