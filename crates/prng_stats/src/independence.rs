//! Independence tests: Wald–Wolfowitz runs about 0.5 and lag-1 autocorrelation.

use crate::distributions::two_sided_p_value;
use crate::statistic::Statistic;

/// Outcome of [`runs_test_independence`].
///
/// `n1` counts samples ≥ 0.5 and `n2` counts samples < 0.5. When either class
/// is empty the run count and every derived statistic are undefined.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunsResult {
    /// Number of maximal runs of equal symbols.
    pub runs: Option<usize>,
    /// Standardised run count, (R − μ)/σ.
    pub z: Statistic,
    /// Two-sided p-value, erfc(|Z|/√2).
    pub p_value: Statistic,
    /// Count of samples at or above 0.5.
    pub n1: usize,
    /// Count of samples below 0.5.
    pub n2: usize,
}

impl RunsResult {
    /// Expected number of runs under independence, 1 + 2·n1·n2/(n1+n2).
    pub fn expected_runs(&self) -> Statistic {
        let n = self.n1 + self.n2;
        if n == 0 {
            return Statistic::Undefined;
        }
        Statistic::Defined(1.0 + (2 * self.n1 * self.n2) as f64 / n as f64)
    }
}

/// Binarises the sample about 0.5 and applies the Wald–Wolfowitz runs test.
///
/// # Examples
///
/// ```
/// use prng_stats::runs_test_independence;
///
/// let alternating: Vec<f64> = (0..10).map(|i| if i % 2 == 0 { 0.25 } else { 0.75 }).collect();
/// let result = runs_test_independence(&alternating);
/// assert_eq!(result.runs, Some(10));
/// assert!(result.z.as_f64() > 0.0);
/// ```
pub fn runs_test_independence(samples: &[f64]) -> RunsResult {
    let n1 = samples.iter().filter(|&&x| x >= 0.5).count();
    let n2 = samples.len() - n1;

    if n1 == 0 || n2 == 0 {
        return RunsResult {
            runs: None,
            z: Statistic::Undefined,
            p_value: Statistic::Undefined,
            n1,
            n2,
        };
    }

    let runs = 1 + samples
        .windows(2)
        .filter(|pair| (pair[0] >= 0.5) != (pair[1] >= 0.5))
        .count();

    // Integer products stay exact before the single division.
    let (a, b) = (n1 as u128, n2 as u128);
    let n = a + b;
    let two_ab = 2 * a * b;
    let mu = 1.0 + two_ab as f64 / n as f64;
    let var = (two_ab * (two_ab - n)) as f64 / (n * n * (n - 1)) as f64;

    let z = if var > 0.0 {
        Statistic::Defined((runs as f64 - mu) / var.sqrt())
    } else {
        Statistic::Undefined
    };

    RunsResult {
        runs: Some(runs),
        z,
        p_value: z.map(two_sided_p_value),
        n1,
        n2,
    }
}

/// Lag-1 sample autocorrelation:
/// ρ̂1 = Σ_{i≥1} (x_i − x̄)(x_{i−1} − x̄) / Σ_i (x_i − x̄)².
///
/// Undefined for an empty or constant sequence.
///
/// # Examples
///
/// ```
/// use prng_stats::{autocorr_lag1, Statistic};
///
/// assert_eq!(autocorr_lag1(&[0.3; 8]), Statistic::Undefined);
///
/// let rho = autocorr_lag1(&[0.1, 0.9, 0.1, 0.9]).as_f64();
/// assert!(rho < -0.5);
/// ```
pub fn autocorr_lag1(samples: &[f64]) -> Statistic {
    // The mean of a constant run is not exact in floating point, so the
    // denominator alone cannot detect zero variance.
    let Some(&first) = samples.first() else {
        return Statistic::Undefined;
    };
    if samples.iter().all(|&x| x == first) {
        return Statistic::Undefined;
    }

    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    let num: f64 = samples
        .windows(2)
        .map(|pair| (pair[1] - mean) * (pair[0] - mean))
        .sum();
    let den: f64 = samples.iter().map(|&x| (x - mean) * (x - mean)).sum();

    if den == 0.0 {
        Statistic::Undefined
    } else {
        Statistic::Defined(num / den)
    }
}
