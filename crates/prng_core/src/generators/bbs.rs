//! Blum Blum Shub.
//!
//! `X_{k+1} = X_k^2 mod M` with `M = p·q`, `p ≡ q ≡ 3 (mod 4)`. One output
//! bit (the least significant bit of the new state) is produced per squaring,
//! so a 32-bit float costs 32 modular squarings. The default modulus is small
//! and demonstrative; 64-bit state with 128-bit products covers any pair of
//! 32-bit primes.

use tracing::debug;

use super::unit_fraction;
use crate::error::{PrngError, Result};
use crate::traits::UniformRng;

/// Default seed.
pub const DEFAULT_SEED: u64 = 8731;
/// Default first Blum prime.
pub const DEFAULT_P: u32 = 383;
/// Default second Blum prime.
pub const DEFAULT_Q: u32 = 503;
/// Default number of bits packed into each `random()` draw.
pub const DEFAULT_OUTPUT_BITS: u32 = 32;
/// Widest output that an `f64` mantissa represents exactly.
pub const MAX_OUTPUT_BITS: u32 = 53;

/// Blum Blum Shub generator.
///
/// # Examples
///
/// ```rust
/// use prng_core::BlumBlumShub;
///
/// let bbs = BlumBlumShub::new(8731, 383, 503).unwrap();
/// assert_eq!(bbs.modulus(), 192_649);
/// assert_eq!(bbs.state(), 8731 * 8731 % 192_649);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlumBlumShub {
    p: u32,
    q: u32,
    modulus: u64,
    state: u64,
    output_bits: u32,
}

impl BlumBlumShub {
    /// Creates a generator from a seed and two distinct Blum primes.
    ///
    /// The seed is reduced modulo `M`, mapped away from zero, and stepped
    /// forward until it is coprime with both primes; the initial state is its
    /// square modulo `M`.
    ///
    /// # Errors
    ///
    /// Returns [`PrngError::InvalidParameter`] if `p == q`, if either value is
    /// not prime, or if either is not congruent to 3 modulo 4.
    pub fn new(seed: u64, p: u32, q: u32) -> Result<Self> {
        validate_blum_prime("p", p)?;
        validate_blum_prime("q", q)?;
        if p == q {
            return Err(PrngError::invalid("q", format!("must differ from p ({})", p)));
        }
        let bbs = Self::build(seed, p, q, DEFAULT_OUTPUT_BITS);
        debug!(seed, p, q, modulus = bbs.modulus, state = bbs.state, "constructed BBS");
        Ok(bbs)
    }

    /// Sets how many extracted bits make up one `random()` draw.
    ///
    /// # Errors
    ///
    /// Returns [`PrngError::InvalidParameter`] unless `1 <= bits <= 53`.
    pub fn with_output_bits(mut self, bits: u32) -> Result<Self> {
        if bits == 0 || bits > MAX_OUTPUT_BITS {
            return Err(PrngError::invalid(
                "output_bits",
                format!("must be in [1, {}], got {}", MAX_OUTPUT_BITS, bits),
            ));
        }
        self.output_bits = bits;
        Ok(self)
    }

    fn build(seed: u64, p: u32, q: u32, output_bits: u32) -> Self {
        let modulus = u64::from(p) * u64::from(q);
        let (p64, q64) = (u64::from(p), u64::from(q));

        let mut x0 = seed % modulus;
        if x0 == 0 {
            x0 = 3;
        }
        while x0 % p64 == 0 || x0 % q64 == 0 {
            x0 = (x0 + 1) % modulus;
            if x0 == 0 {
                x0 = 3;
            }
        }

        Self {
            p,
            q,
            modulus,
            state: square_mod(x0, modulus),
            output_bits,
        }
    }

    /// Returns the modulus `M = p·q`.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Returns the prime pair `(p, q)`.
    #[inline]
    pub fn primes(&self) -> (u32, u32) {
        (self.p, self.q)
    }

    /// Returns the current quadratic residue.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Returns the number of bits packed per `random()` draw.
    #[inline]
    pub fn output_bits(&self) -> u32 {
        self.output_bits
    }

    /// Squares the state once and returns its least significant bit.
    #[inline]
    pub fn next_bit(&mut self) -> u64 {
        self.state = square_mod(self.state, self.modulus);
        self.state & 1
    }

    /// Packs `bits` successive bits, first bit most significant.
    fn next_bits(&mut self, bits: u32) -> u64 {
        (0..bits).fold(0u64, |acc, _| (acc << 1) | self.next_bit())
    }
}

impl Default for BlumBlumShub {
    fn default() -> Self {
        Self::build(DEFAULT_SEED, DEFAULT_P, DEFAULT_Q, DEFAULT_OUTPUT_BITS)
    }
}

impl UniformRng for BlumBlumShub {
    fn random(&mut self) -> f64 {
        let bits = self.output_bits;
        unit_fraction(self.next_bits(bits), 1u64 << bits)
    }
}

#[inline]
fn square_mod(x: u64, modulus: u64) -> u64 {
    let x = u128::from(x);
    ((x * x) % u128::from(modulus)) as u64
}

fn validate_blum_prime(name: &'static str, value: u32) -> Result<()> {
    if value % 4 != 3 {
        return Err(PrngError::invalid(
            name,
            format!("must be congruent to 3 mod 4, got {}", value),
        ));
    }
    if !is_prime(value) {
        return Err(PrngError::invalid(name, format!("must be prime, got {}", value)));
    }
    Ok(())
}

/// Trial division; values are at most 32 bits so this is at most ~2^16 steps.
fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let n = u64::from(n);
    let mut d = 3u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
