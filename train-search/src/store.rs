//! Record store loader.
//!
//! Reads the train data file into an in-memory sequence of records. The
//! file holds one or more concatenated top-level JSON arrays of train
//! objects; the loader decodes one array at a time until the input runs
//! out. Individual fields are decoded permissively: an absent or mistyped
//! field becomes the zero value for that field rather than failing the
//! whole load.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::{StationId, StopTime, TrainRecord};

/// Errors from loading the record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The data file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The byte stream is not valid JSON at the point of decoding.
    #[error("data file is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),

    /// An array element could not be interpreted as an object at all.
    #[error("record {index} is not a JSON object")]
    MalformedRecord { index: usize },
}

/// Load all train records from the data file at `path`.
///
/// Records are returned in file order. The file handle is released on
/// every exit path.
pub fn load_records(path: &Path) -> Result<Vec<TrainRecord>, StoreError> {
    let file = File::open(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();

    // The file may hold several concatenated top-level arrays; decode one
    // array at a time, treating exhausted input as normal termination.
    for chunk in serde_json::Deserializer::from_reader(reader).into_iter::<Vec<Value>>() {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) if e.is_io() => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source: e.into(),
                });
            }
            Err(e) => return Err(StoreError::Decode(e)),
        };

        for value in chunk {
            let index = records.len();
            let object = value
                .as_object()
                .ok_or(StoreError::MalformedRecord { index })?;
            records.push(decode_record(object));
        }
    }

    debug!(count = records.len(), "loaded train records");
    Ok(records)
}

/// Build a record from a decoded JSON object.
///
/// Never fails: each field falls back to its zero value when absent or
/// mistyped.
fn decode_record(object: &Map<String, Value>) -> TrainRecord {
    TrainRecord {
        train_id: int_field(object, "trainId"),
        departure_station_id: StationId::new(int_field(object, "departureStationId")),
        arrival_station_id: StationId::new(int_field(object, "arrivalStationId")),
        price: float_field(object, "price"),
        arrival_time: time_field(object, "arrivalTime"),
        departure_time: time_field(object, "departureTime"),
    }
}

/// Decode an integer field, or 0 when absent or mistyped.
fn int_field(object: &Map<String, Value>, key: &str) -> i64 {
    match object.get(key).and_then(Value::as_i64) {
        Some(v) => v,
        None => {
            debug!(field = key, "missing or mistyped integer field, using 0");
            0
        }
    }
}

/// Decode a numeric field, or 0.0 when absent or mistyped.
fn float_field(object: &Map<String, Value>, key: &str) -> f64 {
    match object.get(key).and_then(Value::as_f64) {
        Some(v) => v,
        None => {
            debug!(field = key, "missing or mistyped numeric field, using 0");
            0.0
        }
    }
}

/// Decode an "HH:MM:SS" field, or the zero time when absent, mistyped
/// or unparsable.
fn time_field(object: &Map<String, Value>, key: &str) -> StopTime {
    let parsed = object
        .get(key)
        .and_then(Value::as_str)
        .and_then(|s| StopTime::parse_hhmmss(s).ok());

    match parsed {
        Some(t) => t,
        None => {
            debug!(field = key, "missing or unparsable time field, using 00:00:00");
            StopTime::zero()
        }
    }
}
