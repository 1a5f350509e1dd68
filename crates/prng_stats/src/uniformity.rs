//! Chi-square goodness-of-fit against the uniform distribution on [0, 1).

use crate::statistic::Statistic;

/// Bin count used when the caller has no preference.
pub const DEFAULT_BINS: usize = 50;

/// Outcome of [`chi_square_uniform`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChiSquareResult {
    /// Σ (O_k − E)² / E over all bins; undefined for an empty sample.
    pub statistic: Statistic,
    /// Degrees of freedom, `bins − 1`.
    pub df: usize,
    /// Expected count per bin, N / bins.
    pub expected: f64,
    /// Observed count per bin.
    pub counts: Vec<u64>,
}

impl ChiSquareResult {
    /// Number of bins the sample was partitioned into.
    #[inline]
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Total number of observations.
    #[inline]
    pub fn n(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Bin index for `x`: `floor(x · bins)`, clamped into `[0, bins − 1]`.
///
/// Exactly 1.0 (or anything above) lands in the last bin and negative inputs
/// in the first, so no observation is ever dropped.
#[inline]
pub(crate) fn bin_index(x: f64, bins: usize) -> usize {
    let scaled = (x * bins as f64).floor();
    if scaled <= 0.0 || scaled.is_nan() {
        0
    } else {
        (scaled as usize).min(bins - 1)
    }
}

/// Partitions [0, 1) into `bins` equal bins and computes the chi-square
/// statistic of the observed counts against N/bins per bin.
///
/// # Panics
///
/// Panics if `bins` is zero.
///
/// # Examples
///
/// ```
/// use prng_stats::chi_square_uniform;
///
/// let samples = [0.05, 0.15, 0.25, 0.35, 0.45, 0.55, 0.65, 0.75, 0.85, 0.95];
/// let result = chi_square_uniform(&samples, 10);
/// assert_eq!(result.statistic.as_f64(), 0.0);
/// assert_eq!(result.df, 9);
/// ```
pub fn chi_square_uniform(samples: &[f64], bins: usize) -> ChiSquareResult {
    assert!(bins > 0, "bin count must be positive");

    let mut counts = vec![0u64; bins];
    for &x in samples {
        counts[bin_index(x, bins)] += 1;
    }

    let expected = samples.len() as f64 / bins as f64;
    let statistic = if samples.is_empty() {
        Statistic::Undefined
    } else {
        Statistic::Defined(
            counts
                .iter()
                .map(|&observed| {
                    let diff = observed as f64 - expected;
                    diff * diff / expected
                })
                .sum(),
        )
    };

    ChiSquareResult {
        statistic,
        df: bins - 1,
        expected,
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bin_index_edges() {
        assert_eq!(bin_index(0.0, 35), 0);
        assert_eq!(bin_index(0.999_999, 35), 34);
        assert_eq!(bin_index(1.0, 35), 34);
        assert_eq!(bin_index(-0.1, 35), 0);
        assert_eq!(bin_index(0.5, 2), 1);
    }

    #[test]
    fn test_counts_sum_to_n() {
        let samples: Vec<f64> = (0..997).map(|i| (i as f64 * 0.618_034) % 1.0).collect();
        let result = chi_square_uniform(&samples, 35);
        assert_eq!(result.n(), 997);
        assert_eq!(result.bins(), 35);
    }

    #[test]
    fn test_all_in_one_bin() {
        let samples = vec![0.01; 100];
        let result = chi_square_uniform(&samples, 10);
        // (100 - 10)^2/10 + 9 * 10 = 810 + 90
        assert_relative_eq!(result.statistic.as_f64(), 900.0, epsilon = 1e-9);
        assert_eq!(result.counts[0], 100);
    }

    #[test]
    fn test_empty_sample_is_undefined() {
        let result = chi_square_uniform(&[], 10);
        assert_eq!(result.statistic, Statistic::Undefined);
        assert_eq!(result.counts, vec![0; 10]);
        assert_eq!(result.df, 9);
    }

    #[test]
    fn test_single_bin_statistic_is_zero() {
        let result = chi_square_uniform(&[0.1, 0.9, 0.5], 1);
        assert_eq!(result.statistic, Statistic::Defined(0.0));
        assert_eq!(result.df, 0);
    }

    #[test]
    #[should_panic(expected = "bin count must be positive")]
    fn test_zero_bins_panics() {
        chi_square_uniform(&[0.5], 0);
    }
}
