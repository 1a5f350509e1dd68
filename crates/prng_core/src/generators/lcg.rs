//! Linear congruential generator.
//!
//! Recurrence `X ← (a·X + c) mod m`, output `X / m`.
//!
//! The Hull–Dobell theorem gives full period `m` when gcd(c, m) = 1, every
//! prime factor of `m` divides `a − 1`, and `4 | m ⇒ 4 | (a − 1)`. These
//! conditions are the caller's responsibility and are not checked: poorly
//! chosen parameters yield a short, degenerate period, exactly as the
//! historical algorithm does.

use tracing::debug;

use super::unit_fraction;
use crate::error::{PrngError, Result};
use crate::traits::UniformRng;

/// Default seed for reproducible runs.
pub const DEFAULT_SEED: u64 = 123_456_789;
/// Default multiplier (Numerical Recipes).
pub const DEFAULT_A: u64 = 1_664_525;
/// Default increment (Numerical Recipes).
pub const DEFAULT_C: u64 = 1_013_904_223;
/// Default modulus, 2^32.
pub const DEFAULT_M: u64 = 1 << 32;

/// Linear congruential generator with state in `[0, m)`.
///
/// # Examples
///
/// ```rust
/// use prng_core::{Lcg, UniformRng};
///
/// let mut lcg = Lcg::default();
/// lcg.random();
/// assert_eq!(lcg.state(), 920_370_032);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    a: u64,
    c: u64,
    m: u64,
    state: u64,
}

impl Lcg {
    /// Creates an LCG with the default 32-bit parameters.
    pub fn new(seed: u64) -> Self {
        Self {
            a: DEFAULT_A,
            c: DEFAULT_C,
            m: DEFAULT_M,
            state: seed % DEFAULT_M,
        }
    }

    /// Creates an LCG with explicit parameters.
    ///
    /// The seed is reduced modulo `m`.
    ///
    /// # Errors
    ///
    /// Returns [`PrngError::InvalidParameter`] if `m` is zero.
    pub fn with_params(seed: u64, a: u64, c: u64, m: u64) -> Result<Self> {
        if m == 0 {
            return Err(PrngError::invalid("m", "modulus must be positive"));
        }
        debug!(seed, a, c, m, "constructed LCG");
        Ok(Self {
            a,
            c,
            m,
            state: seed % m,
        })
    }

    /// Returns the current state `X`.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Returns the `(a, c, m)` parameters.
    #[inline]
    pub fn params(&self) -> (u64, u64, u64) {
        (self.a, self.c, self.m)
    }

    /// Advances the state once and returns it.
    #[inline]
    pub fn next_state(&mut self) -> u64 {
        // Widened so a·X + c never wraps for any 64-bit modulus.
        let next = (u128::from(self.a) * u128::from(self.state) + u128::from(self.c))
            % u128::from(self.m);
        self.state = next as u64;
        self.state
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl UniformRng for Lcg {
    #[inline]
    fn random(&mut self) -> f64 {
        unit_fraction(self.next_state(), self.m)
    }
}
