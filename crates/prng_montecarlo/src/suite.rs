//! Per-generator integration suite over the reference integrands.

use prng_core::{Generator, GeneratorKind, GeneratorSpec, UniformRng};
use rayon::prelude::*;
use tracing::info;

use crate::config::IntegrationConfig;
use crate::error::{ConfigError, SuiteError};
use crate::integrands::reference_integrands;
use crate::result::IntegrationResult;

/// One integrand's outcome within a suite.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SuiteEntry {
    /// Integrand identifier.
    pub integrand: &'static str,
    /// Human-readable integrand.
    pub formula: &'static str,
    /// Lower limit.
    pub a: f64,
    /// Upper limit.
    pub b: f64,
    /// Exact value, when known.
    pub theoretical: Option<f64>,
    /// Estimate and interval.
    pub result: IntegrationResult,
    /// |estimate − exact| / |exact|.
    pub relative_error: Option<f64>,
    /// Whether the interval contains the exact value.
    pub covered: Option<bool>,
}

/// All reference integrals computed with one generator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SuiteReport {
    /// Generator label.
    pub label: String,
    /// Samples per integral.
    pub n: usize,
    /// Entries in [`reference_integrands`] order.
    pub entries: Vec<SuiteEntry>,
}

impl SuiteReport {
    /// Returns `true` when every known value is covered by its interval.
    pub fn all_covered(&self) -> bool {
        self.entries.iter().all(|e| e.covered.unwrap_or(true))
    }
}

/// Integrates every reference integrand with `rng`, in order.
///
/// The generator is not reset between integrands: the second integral
/// consumes the draws that follow the first.
///
/// # Errors
///
/// Propagates [`ConfigError`] from [`integrate`](crate::integrate).
pub fn run_suite<R>(
    label: &str,
    rng: &mut R,
    config: &IntegrationConfig,
) -> Result<SuiteReport, ConfigError>
where
    R: UniformRng + ?Sized,
{
    let mut entries = Vec::new();
    for integrand in reference_integrands() {
        let result = integrand.integrate(rng, config)?;
        let relative_error = integrand.theoretical.map(|t| result.relative_error(t));
        let covered = integrand.theoretical.map(|t| result.covers(t));

        info!(
            generator = label,
            integrand = integrand.name,
            estimate = result.estimate,
            std_error = result.std_error,
            covered = ?covered,
            "Integral estimated"
        );

        entries.push(SuiteEntry {
            integrand: integrand.name,
            formula: integrand.formula,
            a: integrand.a,
            b: integrand.b,
            theoretical: integrand.theoretical,
            result,
            relative_error,
            covered,
        });
    }

    Ok(SuiteReport {
        label: label.to_string(),
        n: config.n_samples(),
        entries,
    })
}

/// Generators compared by the integration suite, in report order.
pub fn suite_generators() -> Vec<GeneratorSpec> {
    vec![
        GeneratorSpec::new(GeneratorKind::Std, 12_345).with_label("std(12345)"),
        GeneratorSpec::new(GeneratorKind::Mt19937, 5_489).with_label("MT19937(5489)"),
        GeneratorSpec::new(GeneratorKind::Lcg, 123_456_789).with_label("LCG(123456789)"),
        GeneratorSpec::new(GeneratorKind::Os, 0).with_label("os"),
    ]
}

/// Runs [`run_suite`] for every spec on the rayon pool, preserving order.
///
/// # Errors
///
/// Returns the first generator construction or configuration error.
pub fn run_all(
    specs: &[GeneratorSpec],
    config: &IntegrationConfig,
) -> Result<Vec<SuiteReport>, SuiteError> {
    specs
        .par_iter()
        .map(|spec| -> Result<SuiteReport, SuiteError> {
            let mut rng = Generator::from_spec(spec)?;
            Ok(run_suite(spec.label(), &mut rng, config)?)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prng_core::Mt19937;

    fn small() -> IntegrationConfig {
        IntegrationConfig::builder().n_samples(1_000).build().unwrap()
    }

    #[test]
    fn test_suite_runs_integrands_in_order() {
        let report = run_suite("mt", &mut Mt19937::default(), &small()).unwrap();
        let names: Vec<_> = report.entries.iter().map(|e| e.integrand).collect();
        assert_eq!(names, ["int_sin", "int_normal"]);
        assert_eq!(report.n, 1_000);
        assert!(report.entries.iter().all(|e| e.relative_error.is_some()));
    }

    #[test]
    fn test_suite_does_not_reset_generator() {
        let config = small();
        let mut shared = Mt19937::default();
        let report = run_suite("mt", &mut shared, &config).unwrap();

        let mut fresh = Mt19937::default();
        let second_alone = reference_integrands()[1].integrate(&mut fresh, &config).unwrap();
        assert_ne!(report.entries[1].result, second_alone);
    }

    #[test]
    fn test_suite_generators_labels() {
        let labels: Vec<String> = suite_generators()
            .iter()
            .map(|s| s.label().to_string())
            .collect();
        assert_eq!(labels, ["std(12345)", "MT19937(5489)", "LCG(123456789)", "os"]);
    }

    #[test]
    fn test_run_all_matches_sequential() {
        let config = small();
        let specs: Vec<_> = suite_generators()
            .into_iter()
            .filter(|s| s.kind.is_deterministic())
            .collect();
        let parallel = run_all(&specs, &config).unwrap();
        for (spec, report) in specs.iter().zip(parallel) {
            let mut rng = Generator::from_spec(spec).unwrap();
            assert_eq!(report, run_suite(spec.label(), &mut rng, &config).unwrap());
        }
    }
}
