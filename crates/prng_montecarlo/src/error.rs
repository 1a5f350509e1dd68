//! Error types for the Monte Carlo integrator.

use prng_core::PrngError;
use thiserror::Error;

/// Configuration error for Monte Carlo integration.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Sample count outside valid range [1, 100_000_000].
    #[error("Invalid sample count {0}: must be in range [1, 100_000_000]")]
    InvalidSampleCount(usize),
    /// Integration bounds that are not finite.
    #[error("Invalid bounds [{a}, {b}]: both limits must be finite")]
    InvalidBounds {
        /// Lower limit.
        a: f64,
        /// Upper limit.
        b: f64,
    },
    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Failure of a multi-generator integration run.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SuiteError {
    /// A generator could not be built from its spec.
    #[error(transparent)]
    Generator(#[from] PrngError),
    /// An integrand or configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidSampleCount(0);
        assert!(err.to_string().contains("Invalid sample count 0"));

        let err = ConfigError::InvalidBounds {
            a: 0.0,
            b: f64::INFINITY,
        };
        assert!(err.to_string().contains("must be finite"));

        let err = ConfigError::InvalidParameter {
            name: "z_critical",
            value: "must be positive".to_string(),
        };
        assert!(err.to_string().contains("z_critical"));
    }

    #[test]
    fn test_suite_error_is_transparent() {
        let err: SuiteError = ConfigError::InvalidSampleCount(0).into();
        assert_eq!(err.to_string(), ConfigError::InvalidSampleCount(0).to_string());
    }
}
