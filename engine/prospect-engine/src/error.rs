//! Error types for the prospect engine

use prospect_data::DataError;
use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur at the engine's edges
///
/// Evaluation itself never fails: missing rankings, stats and reports come
/// back as `None` or empty collections.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl EngineError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Errors raised by the filter-selection workflow
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("cannot {action} while {state}")]
    InvalidTransition { action: &'static str, state: &'static str },

    #[error("no {0} selected")]
    NoSelection(&'static str),

    #[error("unknown league type '{0}', expected NCAA or Pro")]
    UnknownLeagueType(String),
}
