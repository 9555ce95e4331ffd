//! Console input and output helpers for the shell.

use std::io::{self, BufRead};

use crate::domain::{StopTime, TrainRecord};

/// Read one line from `input`, stripping all trailing CR and LF characters.
///
/// End of input yields the empty string, which downstream validation then
/// rejects; the shell itself never fails on exhausted input.
pub fn read_trimmed_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Format one result record as a single human-readable line with all six
/// fields.
///
/// Times are expanded to full calendar components against the fixed
/// placeholder date; the date parts carry no meaning beyond padding out
/// the display.
pub fn format_record(record: &TrainRecord) -> String {
    format!(
        "Train {}: station {} -> station {}, price {:.2}, departs {}, arrives {}",
        record.train_id,
        record.departure_station_id,
        record.arrival_station_id,
        record.price,
        expand_time(&record.departure_time),
        expand_time(&record.arrival_time),
    )
}

/// Expand a stop time to year/month/day/hour/minute/second/nanosecond
/// components plus the fixed UTC marker.
fn expand_time(time: &StopTime) -> String {
    format!(
        "{} UTC",
        time.to_reference_datetime().format("%Y-%m-%d %H:%M:%S%.9f")
    )
}
