//! Mersenne Twister (MT19937).
//!
//! 624 words of 32-bit state, period 2^19937 − 1. Not cryptographic.
//!
//! All arithmetic is modulo 2^32 and is carried out on `u32` with explicit
//! wrapping, so no masking step is needed after each operation.

use tracing::trace;

use crate::traits::UniformRng;

/// Word size in bits.
pub const W: u32 = 32;
/// Degree of recurrence (state length in words).
pub const N: usize = 624;
/// Middle word offset used by the twist.
pub const M: usize = 397;
/// Separation point of one word.
pub const R: u32 = 31;
/// Coefficients of the rational normal form twist matrix.
pub const A: u32 = 0x9908_B0DF;
/// Tempering shift `u`.
pub const U: u32 = 11;
/// Tempering mask `d`.
pub const D: u32 = 0xFFFF_FFFF;
/// Tempering shift `s`.
pub const S: u32 = 7;
/// Tempering mask `b`.
pub const B: u32 = 0x9D2C_5680;
/// Tempering shift `t`.
pub const T: u32 = 15;
/// Tempering mask `c`.
pub const C: u32 = 0xEFC6_0000;
/// Tempering shift `l`.
pub const L: u32 = 18;
/// Initialisation multiplier.
pub const F: u32 = 1_812_433_253;

/// Canonical reference seed.
pub const DEFAULT_SEED: u32 = 5489;

const LOWER_MASK: u32 = (1 << R) - 1;
const UPPER_MASK: u32 = !LOWER_MASK;

/// 2^32 as `f64`, the output scale.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// MT19937 generator.
///
/// # Examples
///
/// ```rust
/// use prng_core::Mt19937;
///
/// let mut mt = Mt19937::default();
/// let words: Vec<u32> = (0..3).map(|_| mt.next_u32()).collect();
/// assert_eq!(words, [3_499_211_612, 581_869_302, 3_890_346_734]);
/// ```
#[derive(Clone)]
pub struct Mt19937 {
    mt: [u32; N],
    index: usize,
}

impl Mt19937 {
    /// Creates a generator seeded with the low 32 bits of `seed`.
    pub fn new(seed: u64) -> Self {
        let mut rng = Self {
            mt: [0; N],
            index: N,
        };
        rng.reseed(seed);
        rng
    }

    /// Re-expands `seed` into the full state and forces a twist on the next
    /// extraction.
    pub fn reseed(&mut self, seed: u64) {
        self.mt[0] = seed as u32;
        for i in 1..N {
            let prev = self.mt[i - 1];
            self.mt[i] = F.wrapping_mul(prev ^ (prev >> (W - 2))).wrapping_add(i as u32);
        }
        self.index = N;
    }

    /// Regenerates all `N` words of state.
    fn twist(&mut self) {
        for i in 0..N {
            let x = (self.mt[i] & UPPER_MASK) | (self.mt[(i + 1) % N] & LOWER_MASK);
            let mut x_a = x >> 1;
            if x & 1 != 0 {
                x_a ^= A;
            }
            self.mt[i] = self.mt[(i + M) % N] ^ x_a;
        }
        self.index = 0;
        trace!("mt19937 twist");
    }

    /// Extracts the next tempered 32-bit word.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.mt[self.index];
        y ^= (y >> U) & D;
        y ^= (y << S) & B;
        y ^= (y << T) & C;
        y ^= y >> L;
        self.index += 1;
        y
    }

    /// Returns the raw (untempered) state words.
    #[inline]
    pub fn state(&self) -> &[u32; N] {
        &self.mt
    }

    /// Returns the extraction cursor; `N` means a twist is pending.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::new(u64::from(DEFAULT_SEED))
    }
}

impl std::fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mt19937")
            .field("mt[0]", &self.mt[0])
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Mt19937 {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.mt[..] == other.mt[..]
    }
}

impl Eq for Mt19937 {}

impl UniformRng for Mt19937 {
    #[inline]
    fn random(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }
}
