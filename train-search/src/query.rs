//! Query validation.
//!
//! Turns the three raw strings the shell collects into a typed [`Query`],
//! or reports the first thing wrong with them.

use std::fmt;

use crate::domain::{InvalidStationId, StationId};

/// Errors from validating raw query input.
///
/// Each variant names exactly one rejected input; validation never
/// accumulates multiple failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("departure station is empty")]
    EmptyDepartureStation,

    #[error("departure station is not a number")]
    InvalidDepartureStation,

    #[error("arrival station is empty")]
    EmptyArrivalStation,

    #[error("arrival station is not a number")]
    InvalidArrivalStation,

    #[error("unsupported sort criterion (expected price, arrival-time or departure-time)")]
    UnsupportedCriterion,
}

/// The field a search result is ordered by, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    Price,
    ArrivalTime,
    DepartureTime,
}

impl SortCriterion {
    /// Parse a criterion from its exact wire spelling.
    ///
    /// Matching is case-sensitive with no trimming; the caller is expected
    /// to have stripped line terminators already.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "price" => Some(Self::Price),
            "arrival-time" => Some(Self::ArrivalTime),
            "departure-time" => Some(Self::DepartureTime),
            _ => None,
        }
    }

    /// Returns the wire spelling of this criterion.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::ArrivalTime => "arrival-time",
            Self::DepartureTime => "departure-time",
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    /// Station the trains must depart from.
    pub departure: StationId,

    /// Station the trains must arrive at.
    pub arrival: StationId,

    /// Field to order the results by.
    pub criterion: SortCriterion,
}

/// Validate the three raw inputs into a [`Query`].
///
/// Checks run in a fixed order (departure station, arrival station,
/// criterion) and stop at the first failure.
pub fn validate(
    departure_raw: &str,
    arrival_raw: &str,
    criterion_raw: &str,
) -> Result<Query, ValidationError> {
    let departure = StationId::parse(departure_raw).map_err(|e| match e {
        InvalidStationId::Empty => ValidationError::EmptyDepartureStation,
        InvalidStationId::NotANumber => ValidationError::InvalidDepartureStation,
    })?;

    let arrival = StationId::parse(arrival_raw).map_err(|e| match e {
        InvalidStationId::Empty => ValidationError::EmptyArrivalStation,
        InvalidStationId::NotANumber => ValidationError::InvalidArrivalStation,
    })?;

    let criterion =
        SortCriterion::parse(criterion_raw).ok_or(ValidationError::UnsupportedCriterion)?;

    Ok(Query {
        departure,
        arrival,
        criterion,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn criterion_string() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("price".to_string()),
            Just("arrival-time".to_string()),
            Just("departure-time".to_string()),
        ]
    }

    proptest! {
        /// Any integer-parseable pair of stations with a known criterion
        /// validates, and the query carries those exact values.
        #[test]
        fn valid_inputs_validate(
            dep in any::<i64>(),
            arr in any::<i64>(),
            criterion in criterion_string(),
        ) {
            let query = validate(&dep.to_string(), &arr.to_string(), &criterion).unwrap();

            prop_assert_eq!(query.departure.value(), dep);
            prop_assert_eq!(query.arrival.value(), arr);
            prop_assert_eq!(query.criterion.as_str(), criterion.as_str());
        }

        /// Non-numeric departure input is always the first error reported
        #[test]
        fn bad_departure_reported_first(
            dep in "[a-z]{1,6}",
            arr in "[a-z]{0,6}",
            criterion in "[a-z-]{0,15}",
        ) {
            prop_assert_eq!(
                validate(&dep, &arr, &criterion),
                Err(ValidationError::InvalidDepartureStation)
            );
        }
    }
}
