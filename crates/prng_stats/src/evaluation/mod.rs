//! Evaluation pipeline: sample, test, and judge each generator.
//!
//! A generator passes a test when:
//!
//! - χ² < `chi2_critical`
//! - |Z| ≤ `z_critical` for the runs test
//! - |ρ̂1| ≤ k/√N for the lag-1 autocorrelation
//!
//! Undefined statistics fail their test.
//!
//! [`evaluate_all`] runs independent generators on the rayon pool. Each task
//! builds and owns its generator, so no generator state is shared between
//! threads.

mod config;
mod error;

pub use config::{
    EvaluationConfig, EvaluationConfigBuilder, DEFAULT_AUTOCORR_K, DEFAULT_CHI2_CRITICAL,
    DEFAULT_PIPELINE_BINS, DEFAULT_SAMPLES, DEFAULT_Z_CRITICAL, MAX_BINS, MAX_SAMPLES,
};
pub use error::ConfigError;

use std::hint::black_box;
use std::time::{Duration, Instant};

use prng_core::{Generator, GeneratorKind, GeneratorSpec, PrngError, UniformRng};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::independence::{autocorr_lag1, runs_test_independence, RunsResult};
use crate::statistic::Statistic;
use crate::uniformity::{chi_square_uniform, ChiSquareResult};

/// Verdicts and statistics for one sample sequence.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Evaluation {
    /// Sample length.
    pub n: usize,
    /// Chi-square uniformity result, including the per-bin counts.
    pub chi_square: ChiSquareResult,
    /// Runs test result, including the two-sided p-value.
    pub runs: RunsResult,
    /// Lag-1 autocorrelation ρ̂1.
    pub autocorr: Statistic,
    /// Bound applied to |ρ̂1|.
    pub autocorr_threshold: f64,
    /// χ² below the critical value.
    pub pass_chi2: bool,
    /// |Z| within the critical value.
    pub pass_runs: bool,
    /// |ρ̂1| within k/√N.
    pub pass_autocorr: bool,
}

impl Evaluation {
    /// Returns `true` when all three tests pass.
    #[inline]
    pub fn passes_all(&self) -> bool {
        self.pass_chi2 && self.pass_runs && self.pass_autocorr
    }

    /// Bin counts for histogram rendering.
    #[inline]
    pub fn bin_counts(&self) -> &[u64] {
        &self.chi_square.counts
    }
}

/// [`Evaluation`] tagged with the generator that produced the sample.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeneratorEvaluation {
    /// Display name.
    pub label: String,
    /// Generator family, when built from a spec.
    pub kind: Option<GeneratorKind>,
    /// Theoretical period, when the family is known.
    pub period_note: Option<&'static str>,
    /// Statistics and verdicts.
    pub evaluation: Evaluation,
}

/// Runs all three tests on `samples` and applies the thresholds in `config`.
///
/// The bin count comes from `config`; the sample length is taken from
/// `samples` itself, so callers may evaluate sequences of any length.
pub fn evaluate(samples: &[f64], config: &EvaluationConfig) -> Evaluation {
    let n = samples.len();
    let chi_square = chi_square_uniform(samples, config.bins());
    let runs = runs_test_independence(samples);
    let autocorr = autocorr_lag1(samples);
    let autocorr_threshold = config.autocorr_threshold(n);

    if !runs.z.is_defined() {
        warn!(n1 = runs.n1, n2 = runs.n2, "Runs statistic undefined");
    }
    if !autocorr.is_defined() {
        warn!(n, "Lag-1 autocorrelation undefined");
    }

    let pass_chi2 = chi_square
        .statistic
        .satisfies(|chi2| chi2 < config.chi2_critical());
    let pass_runs = runs.z.satisfies(|z| z.abs() <= config.z_critical());
    let pass_autocorr = autocorr.satisfies(|rho| rho.abs() <= autocorr_threshold);

    Evaluation {
        n,
        chi_square,
        runs,
        autocorr,
        autocorr_threshold,
        pass_chi2,
        pass_runs,
        pass_autocorr,
    }
}

/// Draws `config.n_samples()` values from `rng` and evaluates them.
pub fn evaluate_generator<R>(
    label: &str,
    rng: &mut R,
    config: &EvaluationConfig,
) -> GeneratorEvaluation
where
    R: UniformRng + ?Sized,
{
    let samples = rng.sample(config.n_samples());
    let evaluation = evaluate(&samples, config);

    info!(
        generator = label,
        chi2 = %evaluation.chi_square.statistic,
        z = %evaluation.runs.z,
        rho1 = %evaluation.autocorr,
        passed = evaluation.passes_all(),
        "Generator evaluated"
    );

    GeneratorEvaluation {
        label: label.to_string(),
        kind: None,
        period_note: None,
        evaluation,
    }
}

/// Builds and evaluates every spec in parallel, preserving input order.
///
/// # Errors
///
/// Returns the first construction error among `specs`; no partial results
/// are returned.
pub fn evaluate_all(
    specs: &[GeneratorSpec],
    config: &EvaluationConfig,
) -> Result<Vec<GeneratorEvaluation>, PrngError> {
    debug!(generators = specs.len(), n = config.n_samples(), "Evaluating suite");

    specs
        .par_iter()
        .map(|spec| -> Result<GeneratorEvaluation, PrngError> {
            let mut rng = Generator::from_spec(spec)?;
            let mut result = evaluate_generator(spec.label(), &mut rng, config);
            result.kind = Some(spec.kind);
            result.period_note = Some(spec.kind.period_note());
            Ok(result)
        })
        .collect()
}

/// Wall-clock time taken to draw `n` values from `rng`.
pub fn time_generation<R>(rng: &mut R, n: usize) -> Duration
where
    R: UniformRng + ?Sized,
{
    let start = Instant::now();
    let mut acc = 0.0;
    for _ in 0..n {
        acc += rng.random();
    }
    black_box(acc);
    start.elapsed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prng_core::Mt19937;

    #[test]
    fn test_constant_sequence_fails_everything() {
        let config = EvaluationConfig::default();
        let evaluation = evaluate(&[0.3; 1_000], &config);
        assert!(!evaluation.pass_chi2);
        assert!(!evaluation.pass_runs);
        assert!(!evaluation.pass_autocorr);
        assert_eq!(evaluation.autocorr, Statistic::Undefined);
        assert_eq!(evaluation.runs.z, Statistic::Undefined);
    }

    #[test]
    fn test_bin_counts_match_config() {
        let config = EvaluationConfig::builder().bins(20).build().unwrap();
        let evaluation = evaluate(&Mt19937::default().sample(500), &config);
        assert_eq!(evaluation.bin_counts().len(), 20);
        assert_eq!(evaluation.bin_counts().iter().sum::<u64>(), 500);
    }

    #[test]
    fn test_evaluate_generator_uses_config_length() {
        let config = EvaluationConfig::builder().n_samples(321).build().unwrap();
        let result = evaluate_generator("mt", &mut Mt19937::default(), &config);
        assert_eq!(result.evaluation.n, 321);
        assert_eq!(result.label, "mt");
        assert_eq!(result.kind, None);
    }

    #[test]
    fn test_evaluate_all_preserves_order() {
        let specs = GeneratorSpec::canonical_suite();
        let config = EvaluationConfig::default();
        let results = evaluate_all(&specs, &config).unwrap();
        assert_eq!(results.len(), specs.len());
        for (spec, result) in specs.iter().zip(&results) {
            assert_eq!(result.label, spec.label());
            assert_eq!(result.kind, Some(spec.kind));
        }
    }

    #[test]
    fn test_evaluate_all_matches_sequential() {
        let specs: Vec<GeneratorSpec> = GeneratorSpec::canonical_suite()
            .into_iter()
            .filter(|s| s.kind.is_deterministic())
            .collect();
        let config = EvaluationConfig::default();
        let parallel = evaluate_all(&specs, &config).unwrap();
        for (spec, par) in specs.iter().zip(parallel) {
            let mut rng = Generator::from_spec(spec).unwrap();
            let seq = evaluate_generator(spec.label(), &mut rng, &config);
            assert_eq!(par.evaluation, seq.evaluation);
        }
    }

    #[test]
    fn test_evaluate_all_propagates_construction_error() {
        let bad = GeneratorSpec::new(GeneratorKind::MiddleSquare, 1).with_params(
            prng_core::GeneratorParams {
                n_digits: Some(5),
                ..Default::default()
            },
        );
        let result = evaluate_all(&[bad], &EvaluationConfig::default());
        assert!(matches!(result, Err(PrngError::InvalidParameter { .. })));
    }

    #[test]
    fn test_time_generation_draws() {
        let mut mt = Mt19937::default();
        let _ = time_generation(&mut mt, 1_000);
        let mut fresh = Mt19937::default();
        for _ in 0..1_000 {
            fresh.random();
        }
        assert_eq!(mt.random(), fresh.random());
    }
}
