//! Errors raised at the decoding and lookup boundary.
//!
//! Classification itself never fails; these only come from turning raw
//! inventory data into `Host` values and picking one out of a snapshot.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read snapshot {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed host snapshot from {origin}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("snapshot from {origin} is not a host object, host array or ihosts list")]
    Shape { origin: String },

    #[error("host #{index} ({label}) in snapshot from {origin} does not decode")]
    InvalidHost {
        origin: String,
        index: usize,
        label: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no host matches '{0}'")]
    HostNotFound(String),

    #[error("'{query}' is ambiguous: {}", candidates.join(", "))]
    AmbiguousHost {
        query: String,
        candidates: Vec<String>,
    },
}
