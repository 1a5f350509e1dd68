//! # prng_core: Generator Foundation for the PRNG Lab
//!
//! ## Layer 1 (Foundation) Role
//!
//! prng_core is the bottom layer of the workspace, providing:
//! - The shared uniform interface: [`UniformRng`] (`traits`)
//! - Five classic generators with bit-exact recurrences (`generators`):
//!   [`Lcg`], [`MiddleSquare`], [`Mt19937`], [`BlumBlumShub`], [`Randu`]
//! - Adapters over external sources: [`StdRngSource`], [`OsEntropySource`]
//! - Static dispatch over all of the above: [`Generator`], [`GeneratorSpec`]
//! - Error types: [`PrngError`] (`error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other prng_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - tracing: Logging facade
//! - rand: External comparison sources only; none of the five generators use it
//! - serde: Serialisation of generator specifications (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use prng_core::{Lcg, Mt19937, UniformRng};
//!
//! let mut mt = Mt19937::new(5489);
//! assert_eq!(mt.next_u32(), 3_499_211_612);
//!
//! let mut lcg = Lcg::default();
//! let u = lcg.random();
//! assert!((0.0..1.0).contains(&u));
//!
//! let die = lcg.randint(1, 6);
//! assert!((1..=6).contains(&die));
//! ```
//!
//! ## Thread Safety
//!
//! Generators are plain owned values. They are `Send` but carry no internal
//! synchronisation: a single instance must not be shared across concurrent
//! callers without external exclusion.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable (de)serialisation for `GeneratorKind` and `GeneratorSpec`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod generators;
pub mod traits;

pub use error::{PrngError, Result};
pub use generators::{
    BlumBlumShub, Generator, GeneratorKind, GeneratorParams, GeneratorSpec, Lcg, MiddleSquare,
    Mt19937, OsEntropySource, Randu, StdRngSource,
};
pub use traits::UniformRng;
