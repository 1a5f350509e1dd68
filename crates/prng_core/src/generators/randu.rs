//! IBM's RANDU.
//!
//! `X ← 65539·X mod 2^31`, output `X / 2^31`. Kept for its famous defect:
//! consecutive triples satisfy `X_{k+2} = 6·X_{k+1} − 9·X_k (mod 2^31)`, so
//! points in the unit cube fall on 15 parallel planes. Nothing here corrects
//! that.

use crate::traits::UniformRng;

/// Multiplier, 2^16 + 3.
pub const A: u64 = 65_539;
/// Modulus, 2^31.
pub const M: u64 = 1 << 31;
/// Default seed.
pub const DEFAULT_SEED: u64 = 1;

/// RANDU generator. The state is always odd.
///
/// # Examples
///
/// ```rust
/// use prng_core::{Randu, UniformRng};
///
/// let mut randu = Randu::new(1);
/// randu.random();
/// assert_eq!(randu.state(), 65_539);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Randu {
    state: u64,
}

impl Randu {
    /// Creates a generator; the seed is reduced modulo 2^31 and forced odd.
    pub fn new(seed: u64) -> Self {
        Self {
            state: (seed % M) | 1,
        }
    }

    /// Returns the current (odd) state.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advances the state once and returns it.
    #[inline]
    pub fn next_state(&mut self) -> u64 {
        // Odd times odd stays odd; the mask is the reduction mod 2^31.
        self.state = A.wrapping_mul(self.state) & (M - 1);
        self.state
    }
}

impl Default for Randu {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl UniformRng for Randu {
    #[inline]
    fn random(&mut self) -> f64 {
        self.next_state() as f64 / M as f64
    }
}
