//! Station identifier type.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidStationId {
    /// The input was the empty string.
    #[error("station id is empty")]
    Empty,

    /// The input was not a base-10 integer.
    #[error("station id is not a base-10 integer")]
    NotANumber,
}

/// A numeric station identifier, used as the search filter key.
///
/// Station ids are plain integers in the data file and in user input.
/// Zero and negative ids are accepted: the data format does not reserve
/// any range, so no range check is applied.
///
/// # Examples
///
/// ```
/// use train_search::domain::{InvalidStationId, StationId};
///
/// let id = StationId::parse("42").unwrap();
/// assert_eq!(id.value(), 42);
///
/// // Signs are accepted, as in any base-10 integer
/// assert_eq!(StationId::parse("-7").unwrap().value(), -7);
///
/// // Empty input and non-numeric input are distinct failures
/// assert_eq!(StationId::parse(""), Err(InvalidStationId::Empty));
/// assert_eq!(StationId::parse("x"), Err(InvalidStationId::NotANumber));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StationId(i64);

impl StationId {
    /// Create a station id from a raw integer.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Parse a station id from a base-10 decimal string.
    ///
    /// Distinguishes the empty string from non-numeric input so callers
    /// can report each case separately.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId::Empty);
        }

        s.parse::<i64>()
            .map(Self)
            .map_err(|_| InvalidStationId::NotANumber)
    }

    /// Returns the raw integer value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
