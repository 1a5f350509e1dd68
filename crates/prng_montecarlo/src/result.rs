//! Integration result record.

/// Outcome of one Monte Carlo integral.
///
/// # Examples
///
/// ```rust
/// use prng_montecarlo::IntegrationResult;
///
/// let result = IntegrationResult::new(0.6362, 0.0007, 1.96, 200_000);
/// assert!(result.covers(2.0 / std::f64::consts::PI));
/// assert!((result.half_width() - 0.001372).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IntegrationResult {
    /// (b − a) times the sample mean of f.
    pub estimate: f64,
    /// Standard error of the estimate.
    pub std_error: f64,
    /// Lower confidence limit.
    pub ci_low: f64,
    /// Upper confidence limit.
    pub ci_high: f64,
    /// Number of samples.
    pub n: usize,
}

impl IntegrationResult {
    /// Builds the record and its interval estimate ± z·SE.
    #[inline]
    pub fn new(estimate: f64, std_error: f64, z_critical: f64, n: usize) -> Self {
        Self {
            estimate,
            std_error,
            ci_low: estimate - z_critical * std_error,
            ci_high: estimate + z_critical * std_error,
            n,
        }
    }

    /// Returns `true` if `value` lies inside the closed interval.
    #[inline]
    pub fn covers(&self, value: f64) -> bool {
        self.ci_low <= value && value <= self.ci_high
    }

    /// Returns |estimate − value| / |value|.
    #[inline]
    pub fn relative_error(&self, value: f64) -> f64 {
        (self.estimate - value).abs() / value.abs()
    }

    /// Returns the interval half-width.
    #[inline]
    pub fn half_width(&self) -> f64 {
        0.5 * (self.ci_high - self.ci_low)
    }
}
