//! Time-of-day handling for train records.
//!
//! The data file carries times as "HH:MM:SS" strings with no date
//! component. Only intra-day ordering is meaningful; a fixed placeholder
//! date is attached purely for display.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day at second granularity, with no calendar date.
///
/// Train records carry departure and arrival times as 24-hour "HH:MM:SS"
/// strings. Ordering is chronological within a single day; there is no
/// overnight handling because the records carry no dates to disambiguate.
///
/// # Examples
///
/// ```
/// use train_search::domain::StopTime;
///
/// let t = StopTime::parse_hhmmss("21:30:00").unwrap();
/// assert_eq!(t.to_string(), "21:30:00");
///
/// // Invalid formats are rejected
/// assert!(StopTime::parse_hhmmss("21:30").is_err());
/// assert!(StopTime::parse_hhmmss("25:00:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StopTime {
    time: NaiveTime,
}

/// Placeholder date attached to stop times for display: year 0, January 1.
///
/// Source records carry no date, so the calendar components shown to the
/// user are a fixed constant, never derived from real dates.
fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(0, 1, 1).expect("reference date is valid")
}

impl StopTime {
    /// Create a stop time from a `NaiveTime`.
    pub fn new(time: NaiveTime) -> Self {
        Self { time }
    }

    /// The zero stop time, `00:00:00`.
    ///
    /// Used as the fallback value when a record field is missing or
    /// cannot be interpreted.
    pub fn zero() -> Self {
        Self {
            time: NaiveTime::MIN,
        }
    }

    /// Parse a time from 24-hour "HH:MM:SS" format.
    ///
    /// The input must be exactly 8 characters with colons at positions
    /// 2 and 5.
    pub fn parse_hhmmss(s: &str) -> Result<Self, TimeError> {
        if s.len() != 8 {
            return Err(TimeError::new("expected HH:MM:SS format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' || bytes[5] != b':' {
            return Err(TimeError::new("expected colons at positions 2 and 5"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let second = parse_two_digits(&bytes[6..8])
            .ok_or_else(|| TimeError::new("invalid second digits"))?;
        if second > 59 {
            return Err(TimeError::new("second must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, second)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self { time })
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Returns the second (0-59).
    pub fn second(&self) -> u32 {
        self.time.second()
    }

    /// Expands this time onto the fixed placeholder date for display.
    ///
    /// The resulting datetime's calendar components are the placeholder
    /// (year 0, January 1), not a real date.
    pub fn to_reference_datetime(&self) -> NaiveDateTime {
        reference_date().and_time(self.time)
    }
}

impl Serialize for StopTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl fmt::Debug for StopTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopTime({self})")
    }
}

impl fmt::Display for StopTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn valid_time_string()(
            hour in 0u32..24,
            minute in 0u32..60,
            second in 0u32..60,
        ) -> String {
            format!("{hour:02}:{minute:02}:{second:02}")
        }
    }

    proptest! {
        /// Any valid HH:MM:SS string parses successfully
        #[test]
        fn valid_hhmmss_parses(s in valid_time_string()) {
            prop_assert!(StopTime::parse_hhmmss(&s).is_ok());
        }

        /// Parse then display round-trips
        #[test]
        fn parse_display_roundtrip(s in valid_time_string()) {
            let parsed = StopTime::parse_hhmmss(&s).unwrap();
            prop_assert_eq!(parsed.to_string(), s);
        }

        /// Ordering matches ordering of seconds since midnight
        #[test]
        fn ordering_matches_seconds(a in valid_time_string(), b in valid_time_string()) {
            let ta = StopTime::parse_hhmmss(&a).unwrap();
            let tb = StopTime::parse_hhmmss(&b).unwrap();

            let secs = |t: &StopTime| t.hour() * 3600 + t.minute() * 60 + t.second();
            prop_assert_eq!(ta.cmp(&tb), secs(&ta).cmp(&secs(&tb)));
        }

        /// Invalid hour is rejected
        #[test]
        fn invalid_hour_rejected(hour in 24u32..100, minute in 0u32..60, second in 0u32..60) {
            let s = format!("{hour:02}:{minute:02}:{second:02}");
            prop_assert!(StopTime::parse_hhmmss(&s).is_err());
        }

        /// Invalid minute is rejected
        #[test]
        fn invalid_minute_rejected(hour in 0u32..24, minute in 60u32..100, second in 0u32..60) {
            let s = format!("{hour:02}:{minute:02}:{second:02}");
            prop_assert!(StopTime::parse_hhmmss(&s).is_err());
        }

        /// Invalid second is rejected
        #[test]
        fn invalid_second_rejected(hour in 0u32..24, minute in 0u32..60, second in 60u32..100) {
            let s = format!("{hour:02}:{minute:02}:{second:02}");
            prop_assert!(StopTime::parse_hhmmss(&s).is_err());
        }

        /// Wrong-length strings are rejected
        #[test]
        fn wrong_length_rejected(s in "[0-9:]{0,7}|[0-9:]{9,12}") {
            prop_assert!(StopTime::parse_hhmmss(&s).is_err());
        }
    }
}
