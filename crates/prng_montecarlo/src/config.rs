//! Monte Carlo integration configuration.
//!
//! This module provides the configuration type and builder shared by every
//! integration run.

use super::error::ConfigError;

/// Maximum number of samples per integral.
pub const MAX_SAMPLES: usize = 100_000_000;

/// Default number of samples per integral.
pub const DEFAULT_SAMPLES: usize = 200_000;

/// Default critical value for the two-sided 95% confidence interval.
pub const DEFAULT_Z_CRITICAL: f64 = 1.96;

/// Monte Carlo integration configuration.
///
/// Immutable configuration specifying the sample count and the critical
/// value used for confidence intervals. Use [`IntegrationConfigBuilder`] to
/// construct instances.
///
/// # Examples
///
/// ```rust
/// use prng_montecarlo::IntegrationConfig;
///
/// let config = IntegrationConfig::builder()
///     .n_samples(50_000)
///     .z_critical(2.576)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_samples(), 50_000);
/// assert_eq!(config.z_critical(), 2.576);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IntegrationConfig {
    /// Number of uniform draws per integral.
    n_samples: usize,
    /// Critical value z in estimate ± z·SE.
    z_critical: f64,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            n_samples: DEFAULT_SAMPLES,
            z_critical: DEFAULT_Z_CRITICAL,
        }
    }
}

impl IntegrationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> IntegrationConfigBuilder {
        IntegrationConfigBuilder::default()
    }

    /// Returns the number of samples per integral.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Returns the confidence-interval critical value.
    #[inline]
    pub fn z_critical(&self) -> f64 {
        self.z_critical
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_samples` is 0 or greater than 100,000,000
    /// - `z_critical` is not finite or not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_samples == 0 || self.n_samples > MAX_SAMPLES {
            return Err(ConfigError::InvalidSampleCount(self.n_samples));
        }
        if !self.z_critical.is_finite() || self.z_critical <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "z_critical",
                value: format!("{} must be finite and positive", self.z_critical),
            });
        }
        Ok(())
    }
}

/// Builder for [`IntegrationConfig`].
///
/// Provides a fluent API with validation at build time.
#[derive(Clone, Debug, Default)]
pub struct IntegrationConfigBuilder {
    n_samples: Option<usize>,
    z_critical: Option<f64>,
}

impl IntegrationConfigBuilder {
    /// Sets the number of samples per integral.
    ///
    /// # Arguments
    ///
    /// * `n_samples` - Number of samples in [1, 100_000_000]
    #[inline]
    pub fn n_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = Some(n_samples);
        self
    }

    /// Sets the confidence-interval critical value.
    #[inline]
    pub fn z_critical(mut self, z_critical: f64) -> Self {
        self.z_critical = Some(z_critical);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if validation fails.
    pub fn build(self) -> Result<IntegrationConfig, ConfigError> {
        let config = IntegrationConfig {
            n_samples: self.n_samples.unwrap_or(DEFAULT_SAMPLES),
            z_critical: self.z_critical.unwrap_or(DEFAULT_Z_CRITICAL),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = IntegrationConfig::builder().build().unwrap();
        assert_eq!(config.n_samples(), 200_000);
        assert_eq!(config.z_critical(), 1.96);
        assert_eq!(config, IntegrationConfig::default());
    }

    #[test]
    fn test_builder_single_sample_allowed() {
        let config = IntegrationConfig::builder().n_samples(1).build().unwrap();
        assert_eq!(config.n_samples(), 1);
    }

    #[test]
    fn test_builder_rejects_zero_samples() {
        let result = IntegrationConfig::builder().n_samples(0).build();
        assert_eq!(result, Err(ConfigError::InvalidSampleCount(0)));
    }

    #[test]
    fn test_builder_rejects_too_many_samples() {
        let result = IntegrationConfig::builder()
            .n_samples(MAX_SAMPLES + 1)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidSampleCount(_))));
    }

    #[test]
    fn test_builder_rejects_bad_z() {
        for z in [0.0, -1.96, f64::NAN, f64::INFINITY] {
            let result = IntegrationConfig::builder().z_critical(z).build();
            assert!(
                matches!(result, Err(ConfigError::InvalidParameter { name: "z_critical", .. })),
                "z = {z}"
            );
        }
    }
}
