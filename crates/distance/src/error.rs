//! Error types for the distance crate.
//!
//! The distance functions themselves are total; these errors only come from
//! parsing a metric name or from the opt-in input length limit.

use thiserror::Error;

/// Result type alias for distance operations.
pub type Result<T> = std::result::Result<T, DistanceError>;

/// Errors that can occur around distance computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceError {
    /// Metric name not recognized
    #[error("Unknown metric: {0} (expected one of: levenshtein, osa)")]
    UnknownMetric(String),

    /// Input exceeds the configured code point limit
    #[error("Input too long: {len} code points exceeds the limit of {max}")]
    InputTooLong {
        /// Length of the offending input in code points
        len: usize,
        /// Configured limit
        max: usize,
    },
}

/// Error code for programmatic handling.
/// Range: 11xxx for distance errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceErrorCode {
    /// Metric name not recognized
    UnknownMetric = 11001,
    /// Input exceeds the configured limit
    InputTooLong = 11002,
}

impl DistanceError {
    /// Returns the error code for this error.
    pub fn code(&self) -> DistanceErrorCode {
        match self {
            DistanceError::UnknownMetric(_) => DistanceErrorCode::UnknownMetric,
            DistanceError::InputTooLong { .. } => DistanceErrorCode::InputTooLong,
        }
    }
}
