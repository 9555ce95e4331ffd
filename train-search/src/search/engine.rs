//! Filter, sort and truncate over the loaded record store.

use tracing::debug;

use crate::domain::TrainRecord;
use crate::query::{Query, SortCriterion};

use super::config::SearchConfig;

/// Search the loaded records for the query's station pair.
///
/// Keeps exactly the records whose departure and arrival stations both
/// match the query, stable-sorts them ascending by the query's criterion
/// (equal keys retain their load order), and returns at most
/// `config.max_results` of them. Fewer matches than the limit returns
/// them all; zero matches returns an empty vec.
pub fn search(records: &[TrainRecord], query: &Query, config: &SearchConfig) -> Vec<TrainRecord> {
    let mut matches: Vec<TrainRecord> = records
        .iter()
        .filter(|r| {
            r.departure_station_id == query.departure && r.arrival_station_id == query.arrival
        })
        .cloned()
        .collect();

    debug!(
        matched = matches.len(),
        criterion = %query.criterion,
        "filtered record store"
    );

    match query.criterion {
        SortCriterion::Price => matches.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortCriterion::ArrivalTime => matches.sort_by_key(|r| r.arrival_time),
        SortCriterion::DepartureTime => matches.sort_by_key(|r| r.departure_time),
    }

    matches.truncate(config.max_results);
    matches
}
