//! Adapters over external random sources.
//!
//! These are the comparison baselines for the classic generators: a seeded
//! general-purpose PRNG and the operating system's entropy source. Neither is
//! part of the studied suite; they only need to satisfy [`UniformRng`].

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};

use crate::traits::UniformRng;

/// 2^-52, the scale for 52-bit fractions.
const TWO_POW_NEG_52: f64 = 1.0 / 4_503_599_627_370_496.0;

/// Seeded general-purpose PRNG baseline.
///
/// Wraps `rand::rngs::StdRng` and keeps the seed for reproducibility
/// tracking.
///
/// # Examples
///
/// ```rust
/// use prng_core::{StdRngSource, UniformRng};
///
/// let mut rng1 = StdRngSource::from_seed(12345);
/// let mut rng2 = StdRngSource::from_seed(12345);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.random(), rng2.random());
/// assert_eq!(rng1.seed(), 12345);
/// ```
#[derive(Clone, Debug)]
pub struct StdRngSource {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation.
    seed: u64,
}

impl StdRngSource {
    /// Creates a new source initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl UniformRng for StdRngSource {
    #[inline]
    fn random(&mut self) -> f64 {
        self.inner.gen()
    }

    #[inline]
    fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.inner.gen();
        }
    }
}

/// Operating-system entropy baseline.
///
/// Each draw is a 52-bit fraction `k / 2^52` built from `OsRng`. Not
/// reproducible by construction.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropySource;

impl OsEntropySource {
    /// Creates a new entropy source.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl UniformRng for OsEntropySource {
    #[inline]
    fn random(&mut self) -> f64 {
        let bits = OsRng.next_u64() >> 12;
        bits as f64 * TWO_POW_NEG_52
    }
}
