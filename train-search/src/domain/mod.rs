//! Domain types for the train timetable search.
//!
//! This module contains the core value types that represent validated
//! train data. All types enforce their invariants at construction time,
//! so code that receives these types can trust their validity.

mod record;
mod station;
mod time;

pub use record::TrainRecord;
pub use station::{InvalidStationId, StationId};
pub use time::{StopTime, TimeError};
