//! Search configuration.

use std::path::PathBuf;

/// Configuration parameters for a train search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Path to the train data file.
    pub store_path: PathBuf,

    /// Maximum number of records to return.
    pub max_results: usize,
}

impl SearchConfig {
    /// Create a configuration with the given data path and result limit.
    pub fn new(store_path: impl Into<PathBuf>, max_results: usize) -> Self {
        Self {
            store_path: store_path.into(),
            max_results,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("./data.json"),
            max_results: 3,
        }
    }
}
