//! CLI error types

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `prng-lab` commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Generator error: {0}")]
    Generator(#[from] prng_core::PrngError),

    #[error("Evaluation settings error: {0}")]
    Evaluation(#[from] prng_stats::ConfigError),

    #[error("Integration settings error: {0}")]
    Integration(#[from] prng_montecarlo::ConfigError),

    #[error("Integration suite error: {0}")]
    Suite(#[from] prng_montecarlo::SuiteError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0} generator(s) failed the configuration check")]
    CheckFailed(usize),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;
