//! Single-pass Monte Carlo integration.
//!
//! The estimator draws u ~ U(0, 1), evaluates f(a + (b − a)u), and keeps
//! only the running sum and sum of squares. Working memory is constant in
//! the sample count.

use prng_core::UniformRng;
use tracing::debug;

use crate::config::IntegrationConfig;
use crate::error::ConfigError;
use crate::result::IntegrationResult;

/// Running moments of the integrand values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Accumulator {
    n: usize,
    sum: f64,
    sum_sq: f64,
}

impl Accumulator {
    /// Creates an empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one integrand value.
    #[inline]
    pub fn push(&mut self, fx: f64) {
        self.n += 1;
        self.sum += fx;
        self.sum_sq += fx * fx;
    }

    /// Number of values seen.
    #[inline]
    pub fn count(&self) -> usize {
        self.n
    }

    /// Sample mean s1/n; NaN when empty.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.sum / self.n as f64
    }

    /// Unbiased sample variance (s2 − n·m²)/(n − 1); zero for n ≤ 1.
    ///
    /// Never negative. Cancellation in s2 − n·m² can push the raw value a
    /// few ulps below zero for a constant integrand, where the square root
    /// in [`finish`](Self::finish) would turn it into a NaN standard error,
    /// so the result is clamped at zero.
    #[inline]
    pub fn variance(&self) -> f64 {
        if self.n > 1 {
            let n = self.n as f64;
            let m = self.mean();
            ((self.sum_sq - n * m * m) / (n - 1.0)).max(0.0)
        } else {
            0.0
        }
    }

    /// Scales the moments by the interval width `w` into an integral estimate.
    pub fn finish(&self, w: f64, z_critical: f64) -> IntegrationResult {
        let estimate = w * self.mean();
        let std_error = w * (self.variance() / self.n as f64).sqrt();
        IntegrationResult::new(estimate, std_error, z_critical, self.n)
    }
}

/// Estimates ∫ₐᵇ f(x) dx from `config.n_samples()` draws of `rng`.
///
/// `b < a` is accepted and yields the signed integral.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidBounds`] when either limit is not finite.
///
/// # Examples
///
/// ```rust
/// use prng_core::Mt19937;
/// use prng_montecarlo::{integrate, IntegrationConfig};
///
/// let config = IntegrationConfig::builder().n_samples(10_000).build().unwrap();
/// let result = integrate(|x| 3.0 * x * x, 0.0, 1.0, &mut Mt19937::default(), &config).unwrap();
/// assert!((result.estimate - 1.0).abs() < 5.0 * result.std_error);
/// ```
pub fn integrate<F, R>(
    f: F,
    a: f64,
    b: f64,
    rng: &mut R,
    config: &IntegrationConfig,
) -> Result<IntegrationResult, ConfigError>
where
    F: Fn(f64) -> f64,
    R: UniformRng + ?Sized,
{
    if !a.is_finite() || !b.is_finite() {
        return Err(ConfigError::InvalidBounds { a, b });
    }

    let w = b - a;
    let mut acc = Accumulator::new();
    for _ in 0..config.n_samples() {
        acc.push(f(a + w * rng.random()));
    }
    let result = acc.finish(w, config.z_critical());

    debug!(
        n = result.n,
        estimate = result.estimate,
        std_error = result.std_error,
        "Monte Carlo integral"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use prng_core::Mt19937;

    struct Fixed(f64);

    impl UniformRng for Fixed {
        fn random(&mut self) -> f64 {
            self.0
        }
    }

    fn config(n: usize) -> IntegrationConfig {
        IntegrationConfig::builder().n_samples(n).build().unwrap()
    }

    #[test]
    fn test_accumulator_moments() {
        let mut acc = Accumulator::new();
        for x in [1.0, 2.0, 3.0, 4.0] {
            acc.push(x);
        }
        assert_eq!(acc.count(), 4);
        assert_relative_eq!(acc.mean(), 2.5);
        assert_relative_eq!(acc.variance(), 5.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_sample_has_zero_error() {
        let result = integrate(|x| x, 0.0, 2.0, &mut Fixed(0.25), &config(1)).unwrap();
        assert_eq!(result.estimate, 1.0);
        assert_eq!(result.std_error, 0.0);
        assert_eq!((result.ci_low, result.ci_high), (1.0, 1.0));
    }

    #[test]
    fn test_constant_integrand_is_exact() {
        let result = integrate(|_| 0.1, -1.0, 2.0, &mut Mt19937::default(), &config(10_000))
            .unwrap();
        assert_relative_eq!(result.estimate, 0.3, epsilon = 1e-9);
        assert!(result.std_error >= 0.0);
        assert!(result.std_error < 1e-9);
    }

    #[test]
    fn test_reversed_bounds_give_signed_integral() {
        let mut fwd = Mt19937::new(7);
        let mut rev = Mt19937::new(7);
        let up = integrate(|_| 1.0, 0.0, 1.0, &mut fwd, &config(100)).unwrap();
        let down = integrate(|_| 1.0, 1.0, 0.0, &mut rev, &config(100)).unwrap();
        assert_eq!(up.estimate, 1.0);
        assert_eq!(down.estimate, -1.0);
    }

    #[test]
    fn test_rejects_non_finite_bounds() {
        for (a, b) in [
            (0.0, f64::INFINITY),
            (f64::NEG_INFINITY, 1.0),
            (f64::NAN, 1.0),
            (0.0, f64::NAN),
        ] {
            let mut rng = Fixed(0.5);
            let result = integrate(|x| x, a, b, &mut rng, &config(10));
            assert!(
                matches!(result, Err(ConfigError::InvalidBounds { .. })),
                "bounds [{}, {}] accepted",
                a,
                b
            );
        }
    }

    #[test]
    fn test_variance_of_constant_values_is_not_negative() {
        let mut acc = Accumulator::new();
        for _ in 0..1_000 {
            acc.push(0.3);
        }
        assert!(acc.variance() >= 0.0);
        let result = acc.finish(1.0, 1.96);
        assert!(!result.std_error.is_nan());
        assert!(result.ci_low <= result.estimate && result.estimate <= result.ci_high);
    }

    #[test]
    fn test_draws_exactly_n() {
        let mut a = Mt19937::new(99);
        let mut b = Mt19937::new(99);
        integrate(|x| x, 0.0, 1.0, &mut a, &config(1_234)).unwrap();
        for _ in 0..1_234 {
            b.random();
        }
        assert_eq!(a.next_u32(), b.next_u32());
    }
}
