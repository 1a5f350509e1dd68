//! Static dispatch enum for uniform sources.
//!
//! [`Generator`] wraps every concrete source in this crate so pipelines can
//! hold heterogeneous generators in one `Vec` without trait objects.
//! [`GeneratorSpec`] is the plain-data description a generator is built from
//! (and what configuration files deserialise into).
//!
//! ## Example
//!
//! ```
//! use prng_core::{Generator, GeneratorKind, GeneratorSpec, UniformRng};
//!
//! let specs = GeneratorSpec::canonical_suite();
//! assert_eq!(specs.len(), 7);
//!
//! let mut lcg = Generator::from_spec(&specs[0]).unwrap();
//! assert_eq!(lcg.kind(), GeneratorKind::Lcg);
//! assert!((0.0..1.0).contains(&lcg.random()));
//! ```

use std::fmt;
use std::str::FromStr;

use super::{bbs, lcg, middle_square, mt19937, randu};
use super::{
    BlumBlumShub, Lcg, MiddleSquare, Mt19937, OsEntropySource, Randu, StdRngSource,
};
use crate::error::{PrngError, Result};
use crate::traits::UniformRng;

/// Identifies a uniform source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum GeneratorKind {
    /// Linear congruential generator.
    Lcg,
    /// von Neumann middle-square.
    MiddleSquare,
    /// Mersenne Twister.
    Mt19937,
    /// Blum Blum Shub.
    Bbs,
    /// IBM RANDU.
    Randu,
    /// Seeded `StdRng` baseline.
    Std,
    /// Operating-system entropy baseline.
    Os,
}

impl GeneratorKind {
    /// All kinds in report order.
    pub const ALL: [GeneratorKind; 7] = [
        GeneratorKind::Lcg,
        GeneratorKind::MiddleSquare,
        GeneratorKind::Mt19937,
        GeneratorKind::Bbs,
        GeneratorKind::Randu,
        GeneratorKind::Std,
        GeneratorKind::Os,
    ];

    /// Display name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            GeneratorKind::Lcg => "LCG",
            GeneratorKind::MiddleSquare => "MiddleSquare",
            GeneratorKind::Mt19937 => "MT19937",
            GeneratorKind::Bbs => "BBS",
            GeneratorKind::Randu => "RANDU",
            GeneratorKind::Std => "std",
            GeneratorKind::Os => "os",
        }
    }

    /// Theoretical period, with order of magnitude where it applies.
    pub fn period_note(&self) -> &'static str {
        match self {
            GeneratorKind::Lcg => "≈2^32 ≈ 4.29e9 (if Hull–Dobell holds)",
            GeneratorKind::MiddleSquare => "very short; small cycles or collapse to 0",
            GeneratorKind::Mt19937 => "2^19937−1 (~1e6001)",
            GeneratorKind::Bbs => "≤ λ(M) = lcm(p−1, q−1) ≈ 95,882 states; bits fewer",
            GeneratorKind::Randu => "≈2^29 ≈ 5.37e8; 15 planes in 3D",
            GeneratorKind::Std => "ChaCha12 stream (≥2^64 per seed)",
            GeneratorKind::Os => "CSPRNG (no deterministic period)",
        }
    }

    /// Canonical seed for reproducible runs.
    pub fn default_seed(&self) -> u64 {
        match self {
            GeneratorKind::Lcg => lcg::DEFAULT_SEED,
            GeneratorKind::MiddleSquare => middle_square::DEFAULT_SEED,
            GeneratorKind::Mt19937 => u64::from(mt19937::DEFAULT_SEED),
            GeneratorKind::Bbs => bbs::DEFAULT_SEED,
            GeneratorKind::Randu => randu::DEFAULT_SEED,
            GeneratorKind::Std => 42,
            GeneratorKind::Os => 0,
        }
    }

    /// Returns `true` if the same seed always yields the same sequence.
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, GeneratorKind::Os)
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeneratorKind {
    type Err = PrngError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "lcg" => Ok(GeneratorKind::Lcg),
            "middlesquare" | "ms" => Ok(GeneratorKind::MiddleSquare),
            "mt19937" | "mt" => Ok(GeneratorKind::Mt19937),
            "bbs" | "blumblumshub" => Ok(GeneratorKind::Bbs),
            "randu" => Ok(GeneratorKind::Randu),
            "std" | "stdrng" | "random" => Ok(GeneratorKind::Std),
            "os" | "osrng" | "secrets" => Ok(GeneratorKind::Os),
            _ => Err(PrngError::invalid(
                "kind",
                format!(
                    "unknown generator '{}'. Supported: lcg, middle-square, mt19937, bbs, randu, std, os",
                    s
                ),
            )),
        }
    }
}

/// Optional structural parameters. Unset fields take the canonical defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct GeneratorParams {
    /// LCG multiplier.
    pub a: Option<u64>,
    /// LCG increment.
    pub c: Option<u64>,
    /// LCG modulus.
    pub m: Option<u64>,
    /// Middle-square digit width.
    pub n_digits: Option<u32>,
    /// First Blum prime.
    pub p: Option<u32>,
    /// Second Blum prime.
    pub q: Option<u32>,
    /// Bits per BBS draw.
    pub output_bits: Option<u32>,
}

/// Plain-data description of a generator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorSpec {
    /// Which source to build.
    pub kind: GeneratorKind,
    /// Seed (ignored by [`GeneratorKind::Os`]).
    pub seed: u64,
    /// Report label; defaults to the kind's name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: Option<String>,
    /// Structural parameters.
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: GeneratorParams,
}

impl GeneratorSpec {
    /// Creates a spec with default parameters.
    pub fn new(kind: GeneratorKind, seed: u64) -> Self {
        Self {
            kind,
            seed,
            label: None,
            params: GeneratorParams::default(),
        }
    }

    /// Creates a spec with the kind's canonical seed.
    pub fn canonical(kind: GeneratorKind) -> Self {
        Self::new(kind, kind.default_seed())
    }

    /// Sets the report label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the structural parameters.
    pub fn with_params(mut self, params: GeneratorParams) -> Self {
        self.params = params;
        self
    }

    /// Report label: the explicit label or the kind's name.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.kind.name())
    }

    /// Every kind with its canonical seed, in report order.
    pub fn canonical_suite() -> Vec<GeneratorSpec> {
        GeneratorKind::ALL.iter().map(|&k| Self::canonical(k)).collect()
    }
}

/// Static dispatch over every uniform source in the crate.
#[derive(Clone, Debug)]
pub enum Generator {
    /// Linear congruential generator.
    Lcg(Lcg),
    /// Middle-square generator.
    MiddleSquare(MiddleSquare),
    /// Mersenne Twister.
    Mt19937(Box<Mt19937>),
    /// Blum Blum Shub.
    Bbs(BlumBlumShub),
    /// RANDU.
    Randu(Randu),
    /// Seeded `StdRng`.
    Std(StdRngSource),
    /// OS entropy.
    Os(OsEntropySource),
}

impl Generator {
    /// Builds a generator from its specification.
    ///
    /// # Errors
    ///
    /// Propagates [`PrngError::InvalidParameter`] from the generator's
    /// constructor.
    pub fn from_spec(spec: &GeneratorSpec) -> Result<Self> {
        let p = &spec.params;
        let generator = match spec.kind {
            GeneratorKind::Lcg => Generator::Lcg(Lcg::with_params(
                spec.seed,
                p.a.unwrap_or(lcg::DEFAULT_A),
                p.c.unwrap_or(lcg::DEFAULT_C),
                p.m.unwrap_or(lcg::DEFAULT_M),
            )?),
            GeneratorKind::MiddleSquare => Generator::MiddleSquare(MiddleSquare::new(
                spec.seed,
                p.n_digits.unwrap_or(middle_square::DEFAULT_DIGITS),
            )?),
            GeneratorKind::Mt19937 => Generator::Mt19937(Box::new(Mt19937::new(spec.seed))),
            GeneratorKind::Bbs => Generator::Bbs(
                BlumBlumShub::new(
                    spec.seed,
                    p.p.unwrap_or(bbs::DEFAULT_P),
                    p.q.unwrap_or(bbs::DEFAULT_Q),
                )?
                .with_output_bits(p.output_bits.unwrap_or(bbs::DEFAULT_OUTPUT_BITS))?,
            ),
            GeneratorKind::Randu => Generator::Randu(Randu::new(spec.seed)),
            GeneratorKind::Std => Generator::Std(StdRngSource::from_seed(spec.seed)),
            GeneratorKind::Os => Generator::Os(OsEntropySource::new()),
        };
        Ok(generator)
    }

    /// Returns the kind of the wrapped source.
    pub fn kind(&self) -> GeneratorKind {
        match self {
            Generator::Lcg(_) => GeneratorKind::Lcg,
            Generator::MiddleSquare(_) => GeneratorKind::MiddleSquare,
            Generator::Mt19937(_) => GeneratorKind::Mt19937,
            Generator::Bbs(_) => GeneratorKind::Bbs,
            Generator::Randu(_) => GeneratorKind::Randu,
            Generator::Std(_) => GeneratorKind::Std,
            Generator::Os(_) => GeneratorKind::Os,
        }
    }
}

impl UniformRng for Generator {
    #[inline]
    fn random(&mut self) -> f64 {
        match self {
            Generator::Lcg(g) => g.random(),
            Generator::MiddleSquare(g) => g.random(),
            Generator::Mt19937(g) => g.random(),
            Generator::Bbs(g) => g.random(),
            Generator::Randu(g) => g.random(),
            Generator::Std(g) => g.random(),
            Generator::Os(g) => g.random(),
        }
    }
}
