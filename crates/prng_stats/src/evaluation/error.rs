//! Error types for the evaluation pipeline.

use thiserror::Error;

/// Configuration error for [`EvaluationConfig`](super::EvaluationConfig).
///
/// Raised at build time; a validated configuration never fails afterwards.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Sample count outside [1, 100_000_000].
    #[error("Invalid sample count {0}: must be in range [1, 100_000_000]")]
    InvalidSampleCount(usize),
    /// Bin count outside [2, 1_000_000].
    #[error("Invalid bin count {0}: must be in range [2, 1_000_000]")]
    InvalidBinCount(usize),
    /// Non-finite or negative threshold.
    #[error("Invalid threshold '{name}': {value} must be finite and non-negative")]
    InvalidThreshold {
        /// Threshold name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
}
