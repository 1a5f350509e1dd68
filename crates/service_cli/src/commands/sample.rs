//! Sample command implementation
//!
//! Prints raw draws from a single generator.

use std::io::{self, BufWriter, Write};

use prng_core::{Generator, GeneratorKind, GeneratorSpec, UniformRng};
use tracing::info;

use crate::Result;

/// Run the sample command
pub fn run(kind: GeneratorKind, seed: Option<u64>, count: usize) -> Result<()> {
    let seed = seed.unwrap_or_else(|| kind.default_seed());
    info!("Sampling {} draws from {} (seed {})", count, kind, seed);

    let mut rng = Generator::from_spec(&GeneratorSpec::new(kind, seed))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for _ in 0..count {
        writeln!(out, "{}", rng.random())?;
    }
    out.flush()?;
    Ok(())
}
