//! prng-lab - Command Line Operations for the PRNG Quality Lab
//!
//! This is the operational entry point for the generator suite, the
//! statistical evaluation engine, and the Monte Carlo integrator.
//!
//! # Commands
//!
//! - `prng-lab evaluate` - Run the hypothesis tests on every configured generator
//! - `prng-lab integrate` - Run the Monte Carlo reference integrals
//! - `prng-lab sample --generator <kind>` - Print raw draws from one generator
//! - `prng-lab time` - Measure generation throughput
//! - `prng-lab check` - Validate the configuration and every generator spec
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate only wires configuration and
//! output around the `prng_core`, `prng_stats` and `prng_montecarlo` crates.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use prng_core::GeneratorKind;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod report;

pub use error::{CliError, Result};

use config::{build_config, CliArgs, LabConfig};
use report::OutputFormat;

/// PRNG quality lab CLI
#[derive(Parser)]
#[command(name = "prng-lab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "prng-lab.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run chi-square, runs and lag-1 autocorrelation tests on every generator
    Evaluate {
        /// Samples drawn per generator
        #[arg(short = 'n', long)]
        samples: Option<usize>,

        /// Chi-square bins
        #[arg(short, long)]
        bins: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print a text histogram per generator
        #[arg(long)]
        histograms: bool,

        /// Compare this generator's verdicts against the std and os baselines
        #[arg(long)]
        compare: Option<String>,
    },

    /// Integrate the reference functions with each comparison generator
    Integrate {
        /// Samples per integral
        #[arg(short = 'n', long)]
        samples: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print raw draws from one generator
    Sample {
        /// Generator kind (lcg, middle-square, mt19937, bbs, randu, std, os)
        #[arg(short, long)]
        generator: GeneratorKind,

        /// Seed (defaults to the kind's canonical seed)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of draws
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Measure wall-clock generation throughput of every generator
    Time {
        /// Draws per generator
        #[arg(short = 'n', long, default_value = "1000000")]
        count: usize,
    },

    /// Check configuration and generator parameters
    Check,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let (samples, bins, mc_samples) = match &self.command {
            Commands::Evaluate { samples, bins, .. } => (*samples, *bins, None),
            Commands::Integrate { samples, .. } => (None, None, *samples),
            _ => (None, None, None),
        };
        CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            samples,
            bins,
            mc_samples,
        }
    }
}

fn init_tracing(config: &LabConfig, explicit_level: bool) {
    // RUST_LOG wins unless a level was given on the command line.
    let filter = if explicit_level {
        EnvFilter::new(config.log_level.as_filter_str())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;

    init_tracing(&config, cli.log_level.is_some());

    if cli.verbose {
        info!("Verbose mode enabled");
        info!("Configuration: {:?}", config);
    }

    match cli.command {
        Commands::Evaluate {
            format,
            output,
            histograms,
            compare,
            ..
        } => commands::evaluate::run(
            &config,
            format,
            output.as_deref(),
            histograms,
            compare.as_deref(),
        ),
        Commands::Integrate { format, output, .. } => {
            commands::integrate::run(&config, format, output.as_deref())
        }
        Commands::Sample {
            generator,
            seed,
            count,
        } => commands::sample::run(generator, seed, count),
        Commands::Time { count } => commands::time::run(&config, count),
        Commands::Check => commands::check::run(&config),
    }
}
