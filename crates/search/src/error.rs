//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors surfaced at the engine's persistence edge.
///
/// Searching itself is total: scanning, scoring, and merging never fail.
/// Only reading and writing the recent-search history can.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Reading or writing a persisted value failed
    #[error("storage error for key '{key}': {source}")]
    Storage {
        /// The key being read or written
        key: String,
        /// The underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The history payload could not be encoded
    #[error("failed to encode history payload: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SearchError {
    pub(crate) fn storage(key: &str, source: std::io::Error) -> Self {
        Self::Storage {
            key: key.to_string(),
            source,
        }
    }
}
