//! The train record value type.

use serde::Serialize;

use super::station::StationId;
use super::time::StopTime;

/// One train in the record store.
///
/// Records are built once by the loader and never mutated afterwards.
/// Serializes to the data file's object shape (camelCase keys), which is
/// how test fixtures are written from the typed model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainRecord {
    /// Identifier of the train itself, not used for filtering.
    pub train_id: i64,

    /// Station the train departs from.
    pub departure_station_id: StationId,

    /// Station the train arrives at.
    pub arrival_station_id: StationId,

    /// Ticket price.
    pub price: f64,

    /// Time of day the train arrives.
    pub arrival_time: StopTime,

    /// Time of day the train departs.
    pub departure_time: StopTime,
}
