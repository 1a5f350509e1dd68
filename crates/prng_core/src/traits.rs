//! The shared uniform-draw interface.
//!
//! Every generator in this crate, and every adapter over an external source,
//! implements [`UniformRng`]. Downstream consumers (the statistical engine and
//! the Monte Carlo integrator) depend on nothing else.

/// A source of uniform variates in [0, 1).
///
/// Only [`random`](UniformRng::random) is required. The provided methods are
/// derived from it uniformly, so two sources that agree on `random()` agree on
/// everything else.
///
/// # Examples
///
/// ```rust
/// use prng_core::{Randu, UniformRng};
///
/// let mut rng = Randu::new(1);
/// let mut buffer = vec![0.0; 16];
/// rng.fill_uniform(&mut buffer);
/// assert!(buffer.iter().all(|&u| (0.0..1.0).contains(&u)));
/// ```
pub trait UniformRng {
    /// Advances the source and returns a value in the half-open interval [0, 1).
    fn random(&mut self) -> f64;

    /// Returns an integer in the closed interval `[low, high]`.
    ///
    /// Computed as `low + floor(random() * (high - low + 1))`. For ranges whose
    /// width is not a power of two this carries a small discretisation bias;
    /// that bias is a property of the reference algorithm and is kept.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    fn randint(&mut self, low: i64, high: i64) -> i64 {
        assert!(low <= high, "randint: empty range [{}, {}]", low, high);
        let span = (i128::from(high) - i128::from(low) + 1) as f64;
        let offset = (self.random() * span).floor() as i128;
        // Float rounding can land exactly on `span` for very wide ranges.
        let value = i128::from(low) + offset;
        value.min(i128::from(high)) as i64
    }

    /// Fills the buffer with uniform values in [0, 1).
    ///
    /// Empty buffers are handled gracefully (no operation).
    fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.random();
        }
    }

    /// Draws `n` values into a freshly allocated sample sequence.
    fn sample(&mut self, n: usize) -> Vec<f64> {
        let mut samples = vec![0.0; n];
        self.fill_uniform(&mut samples);
        samples
    }
}

impl<R: UniformRng + ?Sized> UniformRng for &mut R {
    #[inline]
    fn random(&mut self) -> f64 {
        (**self).random()
    }
}

impl<R: UniformRng + ?Sized> UniformRng for Box<R> {
    #[inline]
    fn random(&mut self) -> f64 {
        (**self).random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of uniforms.
    struct Replay {
        values: Vec<f64>,
        cursor: usize,
    }

    impl UniformRng for Replay {
        fn random(&mut self) -> f64 {
            let v = self.values[self.cursor % self.values.len()];
            self.cursor += 1;
            v
        }
    }

    #[test]
    fn test_randint_maps_unit_interval_edges() {
        let mut rng = Replay {
            values: vec![0.0, 0.999_999_999, 0.5],
            cursor: 0,
        };
        assert_eq!(rng.randint(10, 20), 10);
        assert_eq!(rng.randint(10, 20), 20);
        assert_eq!(rng.randint(10, 20), 15);
    }

    #[test]
    fn test_randint_single_point_range() {
        let mut rng = Replay {
            values: vec![0.75],
            cursor: 0,
        };
        assert_eq!(rng.randint(-3, -3), -3);
    }

    #[test]
    fn test_randint_full_i64_range_stays_in_bounds() {
        let mut rng = Replay {
            values: vec![1.0 - f64::EPSILON],
            cursor: 0,
        };
        let v = rng.randint(i64::MIN, i64::MAX);
        assert!(v <= i64::MAX);
    }

    #[test]
    #[should_panic(expected = "empty range")]
    fn test_randint_rejects_reversed_range() {
        let mut rng = Replay {
            values: vec![0.5],
            cursor: 0,
        };
        let _ = rng.randint(5, 4);
    }

    #[test]
    fn test_sample_draws_in_order() {
        let mut rng = Replay {
            values: vec![0.25, 0.5],
            cursor: 0,
        };
        assert_eq!(rng.sample(3), vec![0.25, 0.5, 0.25]);
    }

    #[test]
    fn test_mut_ref_and_box_forward_to_inner_state() {
        fn first_two<R: UniformRng>(mut rng: R) -> (f64, f64) {
            (rng.random(), rng.random())
        }

        let mut rng = Replay {
            values: vec![0.1, 0.2, 0.3],
            cursor: 0,
        };
        assert_eq!(first_two(&mut rng), (0.1, 0.2));
        // The borrowed draws advanced the owner.
        assert_eq!(rng.random(), 0.3);

        let boxed: Box<dyn UniformRng> = Box::new(rng);
        assert_eq!(first_two(boxed), (0.1, 0.2));
    }
}
