//! Check command implementation
//!
//! Validates the loaded configuration and builds every configured generator.

use prng_core::Generator;
use tracing::{error, info};

use crate::config::LabConfig;
use crate::{CliError, Result};

/// Run the check command
pub fn run(config: &LabConfig) -> Result<()> {
    info!("Checking configuration...");

    let eval_config = config.evaluation_config()?;
    let mc_config = config.integration_config()?;
    println!(
        "evaluation: N={}, bins={}, chi2 < {}, |Z| <= {}, |rho1| <= {}/sqrt(N)",
        eval_config.n_samples(),
        eval_config.bins(),
        eval_config.chi2_critical(),
        eval_config.z_critical(),
        eval_config.autocorr_k(),
    );
    println!(
        "integration: N={}, z={}",
        mc_config.n_samples(),
        mc_config.z_critical()
    );

    let mut failures = 0;
    for spec in &config.generators {
        match Generator::from_spec(spec) {
            Ok(_) => println!("  [OK]   {} ({}, seed {})", spec.label(), spec.kind, spec.seed),
            Err(e) => {
                error!("{}: {}", spec.label(), e);
                println!("  [FAIL] {}: {}", spec.label(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(CliError::CheckFailed(failures));
    }
    info!("All {} generators constructed", config.generators.len());
    Ok(())
}
