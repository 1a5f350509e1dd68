//! Reference integrands with known exact integrals.

use std::f64::consts::{FRAC_2_PI, PI};

use prng_core::UniformRng;

use crate::config::IntegrationConfig;
use crate::error::ConfigError;
use crate::integrator::integrate;
use crate::result::IntegrationResult;

/// 1/√(2π).
const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// ∫₀² φ(x) dx = Φ(2) − Φ(0).
pub const STD_NORMAL_0_2: f64 = 0.477_249_868_051_820_8;

/// sin(πx).
#[inline]
pub fn sin_pi(x: f64) -> f64 {
    (PI * x).sin()
}

/// Standard normal density φ(x) = e^(−x²/2)/√(2π).
#[inline]
pub fn std_normal_pdf(x: f64) -> f64 {
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}

/// A named integrand on fixed bounds, optionally with its exact value.
#[derive(Clone, Copy, Debug)]
pub struct Integrand {
    /// Short identifier used in reports.
    pub name: &'static str,
    /// Human-readable integrand, e.g. `sin(πx)`.
    pub formula: &'static str,
    /// The function being integrated.
    pub f: fn(f64) -> f64,
    /// Lower limit.
    pub a: f64,
    /// Upper limit.
    pub b: f64,
    /// Exact integral, when known.
    pub theoretical: Option<f64>,
}

impl Integrand {
    /// ∫₀¹ sin(πx) dx = 2/π.
    pub const SIN_PI: Integrand = Integrand {
        name: "int_sin",
        formula: "sin(πx)",
        f: sin_pi,
        a: 0.0,
        b: 1.0,
        theoretical: Some(FRAC_2_PI),
    };

    /// ∫₀² φ(x) dx ≈ 0.4772498680518208.
    pub const STD_NORMAL: Integrand = Integrand {
        name: "int_normal",
        formula: "φ(x)",
        f: std_normal_pdf,
        a: 0.0,
        b: 2.0,
        theoretical: Some(STD_NORMAL_0_2),
    };

    /// Creates an integrand without a known value.
    pub const fn new(
        name: &'static str,
        formula: &'static str,
        f: fn(f64) -> f64,
        a: f64,
        b: f64,
    ) -> Self {
        Self {
            name,
            formula,
            f,
            a,
            b,
            theoretical: None,
        }
    }

    /// Attaches the exact value.
    pub const fn with_theoretical(mut self, value: f64) -> Self {
        self.theoretical = Some(value);
        self
    }

    /// Integrates over the record's bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBounds`] for non-finite bounds.
    pub fn integrate<R>(
        &self,
        rng: &mut R,
        config: &IntegrationConfig,
    ) -> Result<IntegrationResult, ConfigError>
    where
        R: UniformRng + ?Sized,
    {
        integrate(self.f, self.a, self.b, rng, config)
    }
}

/// The integrands run by every suite, in report order.
pub fn reference_integrands() -> [Integrand; 2] {
    [Integrand::SIN_PI, Integrand::STD_NORMAL]
}
