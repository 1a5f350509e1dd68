//! # prng_montecarlo: Monte Carlo Integration
//!
//! Estimates ∫ₐᵇ f(x) dx as (b − a) · mean f(a + (b − a)U) with U drawn from
//! any [`UniformRng`](prng_core::UniformRng), in a single pass with constant
//! memory.
//!
//! ## Components
//!
//! - [`IntegrationConfig`]: sample count and confidence critical value
//! - [`integrate`]: the single-pass estimator
//! - [`IntegrationResult`]: estimate, standard error, confidence interval
//! - [`Integrand`]: named reference integrands with exact values
//! - [`run_suite`] / [`run_all`]: reference integrals per generator
//!
//! ## Usage Example
//!
//! ```rust
//! use prng_core::Mt19937;
//! use prng_montecarlo::{Integrand, IntegrationConfig};
//!
//! let config = IntegrationConfig::builder().n_samples(20_000).build().unwrap();
//! let result = Integrand::SIN_PI.integrate(&mut Mt19937::default(), &config).unwrap();
//!
//! println!("{:.6} ± {:.6}", result.estimate, result.half_width());
//! assert!((result.estimate - 2.0 / std::f64::consts::PI).abs() < 5.0 * result.std_error);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod integrands;
pub mod integrator;
pub mod result;
pub mod suite;

pub use config::{IntegrationConfig, IntegrationConfigBuilder};
pub use error::{ConfigError, SuiteError};
pub use integrands::{reference_integrands, sin_pi, std_normal_pdf, Integrand, STD_NORMAL_0_2};
pub use integrator::{integrate, Accumulator};
pub use result::IntegrationResult;
pub use suite::{run_all, run_suite, suite_generators, SuiteEntry, SuiteReport};
