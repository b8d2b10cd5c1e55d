//! Snapshot loading: reads host records an inventory client already fetched.

use super::error::{Error, Result};
use super::types::Host;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Path that selects standard input.
pub const STDIN: &str = "-";

/// Key of the inventory list response, `{"ihosts": [...]}`.
const LIST_KEY: &str = "ihosts";

/// Decodes every host in a snapshot read from `reader`.
///
/// # Errors
/// Returns `Error::Json` if the input is not JSON, `Error::Shape` if it is
/// not a host list, host array or single host object, and
/// `Error::InvalidHost` naming the first record that does not decode.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Host>> {
    decode(reader, "reader")
}

/// Loads a snapshot from `path`, or from stdin when `path` is `-`.
///
/// # Errors
/// Returns `Error::Io` if the file cannot be opened, otherwise the same
/// errors as `from_reader`.
pub fn from_path(path: &Path) -> Result<Vec<Host>> {
    if path == Path::new(STDIN) {
        return decode(io::stdin().lock(), "stdin");
    }

    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode(BufReader::new(file), &path.display().to_string())
}

fn decode<R: Read>(reader: R, origin: &str) -> Result<Vec<Host>> {
    let value: Value = serde_json::from_reader(reader).map_err(|source| Error::Json {
        origin: origin.to_string(),
        source,
    })?;

    let records = split_records(value).ok_or_else(|| Error::Shape {
        origin: origin.to_string(),
    })?;

    let hosts = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let label = record_label(&record);
            serde_json::from_value(record).map_err(|source| Error::InvalidHost {
                origin: origin.to_string(),
                index,
                label,
                source,
            })
        })
        .collect::<Result<Vec<Host>>>()?;

    tracing::debug!(origin, hosts = hosts.len(), "loaded host snapshot");
    Ok(hosts)
}

/// Splits a snapshot into its host records, or `None` for an unknown shape.
fn split_records(value: Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(records) => Some(records),
        Value::Object(mut map) => match map.remove(LIST_KEY) {
            Some(Value::Array(records)) => Some(records),
            Some(_) => None,
            None => Some(vec![Value::Object(map)]),
        },
        _ => None,
    }
}

fn record_label(record: &Value) -> String {
    ["hostname", "uuid"]
        .iter()
        .find_map(|key| record.get(key).and_then(Value::as_str))
        .unwrap_or("unnamed")
        .to_string()
}
