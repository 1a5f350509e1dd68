//! von Neumann's middle-square method.
//!
//! The state is an `n`-digit decimal number. Each step squares it, pads the
//! square with leading zeros to `2n` digits and keeps the middle `n` digits.
//! Output is `S / 10^n`.
//!
//! Periods are very short and the state can collapse to zero, after which it
//! stays zero forever. Both behaviours are expected and preserved.

use tracing::{debug, warn};

use super::unit_fraction;
use crate::error::{PrngError, Result};
use crate::traits::UniformRng;

/// Default seed.
pub const DEFAULT_SEED: u64 = 675_248;
/// Default digit width.
pub const DEFAULT_DIGITS: u32 = 6;
/// Widest state whose square still fits in 128 bits (10^36 < 2^128).
pub const MAX_DIGITS: u32 = 18;

/// Middle-square generator.
///
/// # Examples
///
/// ```rust
/// use prng_core::{MiddleSquare, UniformRng};
///
/// let mut ms = MiddleSquare::new(675_248, 6).unwrap();
/// assert_eq!(ms.random(), 0.959861);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MiddleSquare {
    n_digits: u32,
    /// 10^(n/2): the square is shifted right by this many digits.
    shift: u128,
    /// 10^n: the kept window and the output scale.
    modulus: u64,
    state: u64,
}

impl MiddleSquare {
    /// Creates a generator with `n_digits`-wide state.
    ///
    /// The seed is zero-padded to `n_digits` and truncated to its last
    /// `n_digits` digits, i.e. reduced modulo `10^n_digits`.
    ///
    /// # Errors
    ///
    /// Returns [`PrngError::InvalidParameter`] if `n_digits` is odd, below 4,
    /// or above [`MAX_DIGITS`].
    pub fn new(seed: u64, n_digits: u32) -> Result<Self> {
        if n_digits < 4 || n_digits % 2 != 0 {
            return Err(PrngError::invalid(
                "n_digits",
                format!("must be even and >= 4, got {}", n_digits),
            ));
        }
        if n_digits > MAX_DIGITS {
            return Err(PrngError::invalid(
                "n_digits",
                format!("must be <= {}, got {}", MAX_DIGITS, n_digits),
            ));
        }
        let modulus = 10u64.pow(n_digits);
        let state = seed % modulus;
        debug!(seed, n_digits, state, "constructed middle-square generator");
        Ok(Self {
            n_digits,
            shift: 10u128.pow(n_digits / 2),
            modulus,
            state,
        })
    }

    /// Returns the current `n`-digit state.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Returns the digit width `n`.
    #[inline]
    pub fn n_digits(&self) -> u32 {
        self.n_digits
    }

    /// Returns `true` once the state has collapsed to the zero fixed point.
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.state == 0
    }

    /// Advances the state once and returns it.
    ///
    /// With the square padded to `2n` digits, the middle `n` digits are the
    /// ones left after dropping the lowest `n/2` digits and keeping the next
    /// `n`, so the slice is computed arithmetically.
    pub fn next_state(&mut self) -> u64 {
        let previous = self.state;
        let square = u128::from(self.state) * u128::from(self.state);
        self.state = ((square / self.shift) % u128::from(self.modulus)) as u64;
        if self.state == 0 && previous != 0 {
            warn!(previous, "middle-square state collapsed to zero");
        }
        self.state
    }
}

impl Default for MiddleSquare {
    fn default() -> Self {
        Self {
            n_digits: DEFAULT_DIGITS,
            shift: 1_000,
            modulus: 1_000_000,
            state: DEFAULT_SEED,
        }
    }
}

impl UniformRng for MiddleSquare {
    #[inline]
    fn random(&mut self) -> f64 {
        unit_fraction(self.next_state(), self.modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_trace_six_digits() {
        let mut ms = MiddleSquare::new(675_248, 6).unwrap();
        assert_eq!(ms.state(), 675_248);
        // 675248^2 = 455959861504 -> "455[959861]504"
        let states: Vec<u64> = (0..5).map(|_| ms.next_state()).collect();
        assert_eq!(states, vec![959_861, 333_139, 981_593, 524_817, 432_883]);
    }

    #[test]
    fn test_reference_trace_four_digits() {
        let mut ms = MiddleSquare::new(1234, 4).unwrap();
        // 1234^2 = 01522756 -> "01[5227]56"
        let states: Vec<u64> = (0..6).map(|_| ms.next_state()).collect();
        assert_eq!(states, vec![5227, 3215, 3362, 3030, 1809, 2724]);
    }

    #[test]
    fn test_short_square_is_zero_padded() {
        // 12^2 = 144 -> "00000144" -> middle "0001"
        let mut ms = MiddleSquare::new(12, 4).unwrap();
        assert_eq!(ms.next_state(), 1);
    }

    #[test]
    fn test_seed_truncated_to_last_digits() {
        let ms = MiddleSquare::new(98_765_432, 4).unwrap();
        assert_eq!(ms.state(), 5432);
    }

    #[test]
    fn test_collapse_to_zero_is_absorbing() {
        // 1000^2 = 01000000 -> middle "0000"
        let mut ms = MiddleSquare::new(1000, 4).unwrap();
        for _ in 0..4 {
            assert_eq!(ms.random(), 0.0);
        }
        assert!(ms.is_collapsed());
    }

    #[test]
    fn test_invalid_digit_widths() {
        for n in [0, 2, 3, 5, 7, 20] {
            let err = MiddleSquare::new(1234, n).unwrap_err();
            assert!(matches!(
                err,
                PrngError::InvalidParameter {
                    name: "n_digits",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_widest_state_stays_in_range() {
        let mut ms = MiddleSquare::new(999_999_999_999_999_999, MAX_DIGITS).unwrap();
        for _ in 0..100 {
            let u = ms.random();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_default_matches_explicit_construction() {
        assert_eq!(
            MiddleSquare::default(),
            MiddleSquare::new(DEFAULT_SEED, DEFAULT_DIGITS).unwrap()
        );
    }
}
