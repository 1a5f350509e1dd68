//! # prng_stats: Statistical Evaluation Engine
//!
//! Pure functions over a finite sample sequence in [0, 1), plus the pipeline
//! that turns their outputs into pass/fail verdicts.
//!
//! ## Tests
//!
//! | Question | Function | Result |
//! |----------|----------|--------|
//! | Uniformity | [`chi_square_uniform`] | [`ChiSquareResult`] |
//! | Independence | [`runs_test_independence`] | [`RunsResult`] |
//! | Serial correlation | [`autocorr_lag1`] | [`Statistic`] |
//!
//! Every test borrows its input immutably and keeps nothing, so the functions
//! are safe to call concurrently on independent sequences.
//!
//! ## Undefined Statistics
//!
//! Degenerate inputs (a constant sequence, a sequence entirely on one side of
//! 0.5) make some statistics undefined. Those are reported as
//! [`Statistic::Undefined`] rather than as an error or a bare NaN, and every
//! threshold comparison treats them as a failure.
//!
//! ## Usage Example
//!
//! ```rust
//! use prng_core::{Mt19937, UniformRng};
//! use prng_stats::{evaluate, EvaluationConfig};
//!
//! let config = EvaluationConfig::default();
//! let samples = Mt19937::default().sample(config.n_samples());
//! let evaluation = evaluate(&samples, &config);
//! assert!(evaluation.pass_chi2);
//! assert!(evaluation.pass_runs);
//! assert!(evaluation.pass_autocorr);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod distributions;
pub mod evaluation;
pub mod independence;
pub mod statistic;
pub mod uniformity;

pub use distributions::{erfc, norm_cdf, two_sided_p_value};
pub use evaluation::{
    evaluate, evaluate_all, evaluate_generator, time_generation, ConfigError, Evaluation,
    EvaluationConfig, EvaluationConfigBuilder, GeneratorEvaluation,
};
pub use independence::{autocorr_lag1, runs_test_independence, RunsResult};
pub use statistic::Statistic;
pub use uniformity::{chi_square_uniform, ChiSquareResult, DEFAULT_BINS};
