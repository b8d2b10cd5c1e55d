//! Runtime configuration assembled from command-line flags and environment.

use std::path::PathBuf;

pub const SNAPSHOT_ENV: &str = "HOSTSTATE_SNAPSHOT";
pub const LOG_ENV: &str = "HOSTSTATE_LOG";

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Config {
    /// Snapshot file, `-` for stdin.
    pub snapshot: PathBuf,
    /// `tracing` filter directive, e.g. `debug` or `hoststate=trace`.
    pub log_filter: String,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot: PathBuf::from(hoststate::engine::snapshot::STDIN),
            log_filter: "warn".to_string(),
            color: true,
        }
    }
}

impl Config {
    #[must_use]
    pub fn new(snapshot: Option<PathBuf>, log_filter: Option<String>, no_color: bool) -> Self {
        let defaults = Self::default();
        Self {
            snapshot: snapshot.unwrap_or(defaults.snapshot),
            log_filter: log_filter.unwrap_or(defaults.log_filter),
            color: !no_color,
        }
    }

    /// Applies process-wide settings that do not belong to a single command.
    pub fn apply(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
