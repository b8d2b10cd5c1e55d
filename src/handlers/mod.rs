//! Command handlers for the `hoststate` binary.

pub mod check;
pub mod list;
pub mod why;

use crate::config::Config;
use anyhow::{Context, Result};
use colored::Colorize;
use hoststate::engine::snapshot;
use hoststate::Host;

/// Loads the configured snapshot.
fn load_hosts(config: &Config) -> Result<Vec<Host>> {
    snapshot::from_path(&config.snapshot)
        .with_context(|| format!("Could not load hosts from {}", config.snapshot.display()))
}

fn mark(ok: bool) -> colored::ColoredString {
    if ok {
        "✓".green()
    } else {
        "✗".red()
    }
}
