//! Error types for dataset loading

use thiserror::Error;

/// Result type alias for dataset operations
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading the reference dataset
///
/// Missing rankings, stats or reports are not errors; they surface as
/// `None` or empty slices from the store.
#[derive(Error, Debug)]
pub enum DataError {
    /// Dataset file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset is not valid JSON or does not match the expected collections
    #[error("Malformed dataset: {0}")]
    Json(#[from] serde_json::Error),
}
