//! Evaluation pipeline configuration.

use super::error::ConfigError;

/// Maximum number of samples drawn per generator.
pub const MAX_SAMPLES: usize = 100_000_000;

/// Maximum number of chi-square bins.
pub const MAX_BINS: usize = 1_000_000;

/// Default sample count per generator.
pub const DEFAULT_SAMPLES: usize = 1_000;

/// Default chi-square bin count for the pipeline.
pub const DEFAULT_PIPELINE_BINS: usize = 35;

/// Default chi-square critical value.
///
/// Historical value carried by the lab reports; the exact 95% quantile for
/// 34 degrees of freedom is about 48.60.
pub const DEFAULT_CHI2_CRITICAL: f64 = 49.80;

/// Default two-sided critical value for the runs Z-score (95%).
pub const DEFAULT_Z_CRITICAL: f64 = 1.96;

/// Default multiplier k in |ρ̂1| ≤ k/√N.
pub const DEFAULT_AUTOCORR_K: f64 = 2.0;

/// Evaluation pipeline configuration.
///
/// Immutable; use [`EvaluationConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use prng_stats::EvaluationConfig;
///
/// let config = EvaluationConfig::builder()
///     .n_samples(10_000)
///     .bins(50)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_samples(), 10_000);
/// assert_eq!(config.bins(), 50);
/// assert_eq!(config.z_critical(), 1.96);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EvaluationConfig {
    n_samples: usize,
    bins: usize,
    chi2_critical: f64,
    z_critical: f64,
    autocorr_k: f64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            n_samples: DEFAULT_SAMPLES,
            bins: DEFAULT_PIPELINE_BINS,
            chi2_critical: DEFAULT_CHI2_CRITICAL,
            z_critical: DEFAULT_Z_CRITICAL,
            autocorr_k: DEFAULT_AUTOCORR_K,
        }
    }
}

impl EvaluationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> EvaluationConfigBuilder {
        EvaluationConfigBuilder::default()
    }

    /// Returns the number of samples drawn per generator.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Returns the chi-square bin count.
    #[inline]
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Returns the chi-square critical value.
    #[inline]
    pub fn chi2_critical(&self) -> f64 {
        self.chi2_critical
    }

    /// Returns the runs |Z| critical value.
    #[inline]
    pub fn z_critical(&self) -> f64 {
        self.z_critical
    }

    /// Returns k in the autocorrelation rule |ρ̂1| ≤ k/√N.
    #[inline]
    pub fn autocorr_k(&self) -> f64 {
        self.autocorr_k
    }

    /// Autocorrelation bound k/√n for a sample of length `n`.
    #[inline]
    pub fn autocorr_threshold(&self, n: usize) -> f64 {
        self.autocorr_k / (n as f64).sqrt()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_samples` is 0 or greater than 100,000,000
    /// - `bins` is below 2 or greater than 1,000,000
    /// - any threshold is negative or not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_samples == 0 || self.n_samples > MAX_SAMPLES {
            return Err(ConfigError::InvalidSampleCount(self.n_samples));
        }
        if self.bins < 2 || self.bins > MAX_BINS {
            return Err(ConfigError::InvalidBinCount(self.bins));
        }
        for (name, value) in [
            ("chi2_critical", self.chi2_critical),
            ("z_critical", self.z_critical),
            ("autocorr_k", self.autocorr_k),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }
        Ok(())
    }
}

/// Builder for [`EvaluationConfig`].
///
/// Unset fields take the pipeline defaults (N = 1000, 35 bins, χ² ≤ 49.80,
/// |Z| ≤ 1.96, |ρ̂1| ≤ 2/√N).
#[derive(Clone, Debug, Default)]
pub struct EvaluationConfigBuilder {
    n_samples: Option<usize>,
    bins: Option<usize>,
    chi2_critical: Option<f64>,
    z_critical: Option<f64>,
    autocorr_k: Option<f64>,
}

impl EvaluationConfigBuilder {
    /// Sets the number of samples per generator.
    #[inline]
    pub fn n_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = Some(n_samples);
        self
    }

    /// Sets the chi-square bin count.
    #[inline]
    pub fn bins(mut self, bins: usize) -> Self {
        self.bins = Some(bins);
        self
    }

    /// Sets the chi-square critical value.
    #[inline]
    pub fn chi2_critical(mut self, value: f64) -> Self {
        self.chi2_critical = Some(value);
        self
    }

    /// Sets the runs |Z| critical value.
    #[inline]
    pub fn z_critical(mut self, value: f64) -> Self {
        self.z_critical = Some(value);
        self
    }

    /// Sets k in the autocorrelation rule.
    #[inline]
    pub fn autocorr_k(mut self, value: f64) -> Self {
        self.autocorr_k = Some(value);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if validation fails.
    pub fn build(self) -> Result<EvaluationConfig, ConfigError> {
        let defaults = EvaluationConfig::default();
        let config = EvaluationConfig {
            n_samples: self.n_samples.unwrap_or(defaults.n_samples),
            bins: self.bins.unwrap_or(defaults.bins),
            chi2_critical: self.chi2_critical.unwrap_or(defaults.chi2_critical),
            z_critical: self.z_critical.unwrap_or(defaults.z_critical),
            autocorr_k: self.autocorr_k.unwrap_or(defaults.autocorr_k),
        };
        config.validate()?;
        Ok(config)
    }
}
