//! Integrate command implementation
//!
//! Runs the Monte Carlo reference integrals using prng_montecarlo.

use std::path::Path;

use prng_montecarlo::{run_all, suite_generators};
use tracing::info;

use crate::config::LabConfig;
use crate::report::{self, OutputFormat};
use crate::Result;

/// Run the integrate command
pub fn run(config: &LabConfig, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let mc_config = config.integration_config()?;
    let specs = suite_generators();

    info!("Starting Monte Carlo suite...");
    info!("  Generators: {}", specs.len());
    info!("  Samples per integral: {}", mc_config.n_samples());

    let reports = run_all(&specs, &mc_config)?;

    let content = match format {
        OutputFormat::Json => report::integration_json(&reports, &mc_config)?,
        OutputFormat::Table => report::integration_table(&reports, &mc_config),
    };
    report::emit(&content, output)?;

    info!("Monte Carlo suite complete");
    Ok(())
}
