//! Error types for the fallible edges of the visualizer
//!
//! Playback itself never fails: requests made in the wrong phase are ignored
//! rather than reported. Errors only arise where the visualizer talks to the
//! outside world:
//!
//! - [`HistoryError`]: reading or appending the run-history file
//! - [`ConfigError`]: command-line values that parse but make no sense

use thiserror::Error;

/// Failures of a run-history sink
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed history record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Invalid combinations of command-line settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("value {value} is outside the display range {min}..={max}")]
    ValueOutOfRange { value: u32, min: u32, max: u32 },

    #[error("{count} values given, but the array size must be within {min}..={max}")]
    ValueCount { count: usize, min: usize, max: usize },
}
