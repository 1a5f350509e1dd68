//! Time command implementation
//!
//! Measures generation throughput for every configured generator.

use prng_core::Generator;
use prng_stats::time_generation;
use tracing::info;

use crate::config::LabConfig;
use crate::{CliError, Result};

/// Run the time command
pub fn run(config: &LabConfig, count: usize) -> Result<()> {
    if count == 0 {
        return Err(CliError::InvalidArgument(
            "count must be positive".to_string(),
        ));
    }
    info!("Timing {} draws per generator", count);

    println!("{:<16}  {:>12}  {:>14}", "PRNG", "seconds", "ns/draw");
    for spec in &config.generators {
        let mut rng = Generator::from_spec(spec)?;
        let elapsed = time_generation(&mut rng, count);
        println!(
            "{:<16}  {:>12.6}  {:>14.2}",
            spec.label(),
            elapsed.as_secs_f64(),
            elapsed.as_nanos() as f64 / count as f64
        );
    }
    Ok(())
}
