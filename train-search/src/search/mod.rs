//! Train search: the filter / sort / truncate engine and the end-to-end
//! pipeline the console shell invokes.

mod config;
mod engine;

pub use config::SearchConfig;
pub use engine::search;

use crate::domain::TrainRecord;
use crate::query::{self, ValidationError};
use crate::store::{self, StoreError};

/// Error from the end-to-end search pipeline.
///
/// Validation and load failures propagate unchanged to the caller; the
/// shell is responsible for presenting them.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Run one complete search.
///
/// Validates the three raw inputs, loads the record store from
/// `config.store_path`, then filters, sorts and truncates. There are no
/// retries: the first failure ends the search attempt.
pub fn find_trains(
    departure_raw: &str,
    arrival_raw: &str,
    criterion_raw: &str,
    config: &SearchConfig,
) -> Result<Vec<TrainRecord>, SearchError> {
    let query = query::validate(departure_raw, arrival_raw, criterion_raw)?;
    let records = store::load_records(&config.store_path)?;
    Ok(search(&records, &query, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const DATA: &str = concat!(
        r#"[{"trainId": 1, "departureStationId": 1, "arrivalStationId": 2,"#,
        r#" "price": 50, "arrivalTime": "10:00:00", "departureTime": "09:00:00"},"#,
        r#" {"trainId": 2, "departureStationId": 1, "arrivalStationId": 2,"#,
        r#" "price": 30, "arrivalTime": "11:00:00", "departureTime": "09:30:00"},"#,
        r#" {"trainId": 3, "departureStationId": 1, "arrivalStationId": 3,"#,
        r#" "price": 10, "arrivalTime": "12:00:00", "departureTime": "10:00:00"}]"#,
    );

    fn config_with_data(data: &str) -> (tempfile::TempDir, SearchConfig) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, data).unwrap();
        let config = SearchConfig::new(path, 3);
        (dir, config)
    }

    #[test]
    fn end_to_end_search() {
        let (_dir, config) = config_with_data(DATA);

        let results = find_trains("1", "2", "price", &config).unwrap();

        assert_eq!(
            results.iter().map(|r| r.train_id).collect::<Vec<_>>(),
            vec![2, 1]
        );
    }

    #[test]
    fn validation_error_propagates_unchanged() {
        let (_dir, config) = config_with_data(DATA);

        let err = find_trains("", "2", "price", &config).unwrap_err();

        assert!(matches!(
            err,
            SearchError::Validation(ValidationError::EmptyDepartureStation)
        ));
    }

    #[test]
    fn validation_runs_before_the_store_is_touched() {
        // A missing data file is irrelevant when the input is invalid.
        let config = SearchConfig::new("/nonexistent/data.json", 3);

        let err = find_trains("1", "2", "fastest", &config).unwrap_err();

        assert!(matches!(
            err,
            SearchError::Validation(ValidationError::UnsupportedCriterion)
        ));
    }

    #[test]
    fn load_error_propagates_unchanged() {
        let config = SearchConfig::new("/nonexistent/data.json", 3);

        let err = find_trains("1", "2", "price", &config).unwrap_err();

        assert!(matches!(err, SearchError::Store(StoreError::Io { .. })));
    }

    #[test]
    fn no_matches_is_ok_and_empty() {
        let (_dir, config) = config_with_data(DATA);

        let results = find_trains("8", "9", "price", &config).unwrap();

        assert!(results.is_empty());
    }
}
