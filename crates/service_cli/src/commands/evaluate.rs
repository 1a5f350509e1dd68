//! Evaluate command implementation
//!
//! Runs the hypothesis tests on every configured generator using prng_stats.

use std::fmt::Write as _;
use std::path::Path;

use tracing::{info, warn};

use crate::config::LabConfig;
use crate::report::{self, OutputFormat};
use crate::{CliError, Result};

/// Run the evaluate command
pub fn run(
    config: &LabConfig,
    format: OutputFormat,
    output: Option<&Path>,
    histograms: bool,
    compare: Option<&str>,
) -> Result<()> {
    let eval_config = config.evaluation_config()?;

    info!("Starting evaluation...");
    info!("  Generators: {}", config.generators.len());
    info!("  Samples: {}", eval_config.n_samples());
    info!("  Bins: {}", eval_config.bins());

    if let Some(focus) = compare {
        if !config
            .generators
            .iter()
            .any(|s| s.label().eq_ignore_ascii_case(focus))
        {
            return Err(CliError::InvalidArgument(format!(
                "Unknown generator label for comparison: {}",
                focus
            )));
        }
    }

    let results = prng_stats::evaluate_all(&config.generators, &eval_config)?;

    let content = match format {
        OutputFormat::Json => {
            for flag in table_only_flags(histograms, compare) {
                warn!("{} only applies to table output; ignored for JSON", flag);
            }
            report::evaluation_json(&results, &eval_config)?
        }
        OutputFormat::Table => {
            let mut text = report::evaluation_table(&results, &eval_config);
            if let Some(focus) = compare {
                let _ = write!(text, "\n{}", report::comparison_table(&results, focus));
            }
            if histograms {
                for result in &results {
                    let _ = write!(text, "\n{}", report::histogram(result));
                }
            }
            text
        }
    };

    report::emit(&content, output)?;

    let passed = results.iter().filter(|r| r.evaluation.passes_all()).count();
    info!("Evaluation complete: {}/{} passed all tests", passed, results.len());
    Ok(())
}

/// Flags that only shape the text table. The JSON document already carries
/// the bin counts under `chi_square.counts`.
fn table_only_flags(histograms: bool, compare: Option<&str>) -> Vec<&'static str> {
    let mut flags = Vec::new();
    if histograms {
        flags.push("--histograms");
    }
    if compare.is_some() {
        flags.push("--compare");
    }
    flags
}
