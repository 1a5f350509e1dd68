//! Lab configuration management
//!
//! Handles loading configuration from a TOML file, environment variables, and
//! CLI arguments.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use prng_core::GeneratorSpec;
use prng_montecarlo::IntegrationConfig;
use prng_stats::EvaluationConfig;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "PRNG_LAB_LOG_LEVEL";
/// Environment variable overriding the evaluation sample count.
pub const ENV_SAMPLES: &str = "PRNG_LAB_SAMPLES";
/// Environment variable overriding the chi-square bin count.
pub const ENV_BINS: &str = "PRNG_LAB_BINS";
/// Environment variable overriding the Monte Carlo sample count.
pub const ENV_MC_SAMPLES: &str = "PRNG_LAB_MC_SAMPLES";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the lab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// `[evaluation]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvaluationSection {
    /// Samples drawn per generator
    pub samples: usize,
    /// Chi-square bins
    pub bins: usize,
    /// Chi-square critical value
    pub chi2_critical: f64,
    /// Runs |Z| critical value
    pub z_critical: f64,
    /// k in |rho1| <= k / sqrt(N)
    pub autocorr_k: f64,
}

impl Default for EvaluationSection {
    fn default() -> Self {
        let defaults = EvaluationConfig::default();
        Self {
            samples: defaults.n_samples(),
            bins: defaults.bins(),
            chi2_critical: defaults.chi2_critical(),
            z_critical: defaults.z_critical(),
            autocorr_k: defaults.autocorr_k(),
        }
    }
}

/// `[integration]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntegrationSection {
    /// Samples per integral
    pub samples: usize,
    /// Confidence interval critical value
    pub z_critical: f64,
}

impl Default for IntegrationSection {
    fn default() -> Self {
        let defaults = IntegrationConfig::default();
        Self {
            samples: defaults.n_samples(),
            z_critical: defaults.z_critical(),
        }
    }
}

/// Lab configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Hypothesis-test settings
    pub evaluation: EvaluationSection,
    /// Monte Carlo settings
    pub integration: IntegrationSection,
    /// Generators evaluated by `evaluate` and `check`
    pub generators: Vec<GeneratorSpec>,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            evaluation: EvaluationSection::default(),
            integration: IntegrationSection::default(),
            generators: GeneratorSpec::canonical_suite(),
        }
    }
}

impl LabConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Load the file if it exists, otherwise start from defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(value) = lookup(ENV_SAMPLES) {
            self.evaluation.samples = parse_env(ENV_SAMPLES, &value)?;
        }
        if let Some(value) = lookup(ENV_BINS) {
            self.evaluation.bins = parse_env(ENV_BINS, &value)?;
        }
        if let Some(value) = lookup(ENV_MC_SAMPLES) {
            self.integration.samples = parse_env(ENV_MC_SAMPLES, &value)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(samples) = cli.samples {
            self.evaluation.samples = samples;
        }
        if let Some(bins) = cli.bins {
            self.evaluation.bins = bins;
        }
        if let Some(samples) = cli.mc_samples {
            self.integration.samples = samples;
        }
        Ok(())
    }

    /// Validated hypothesis-test configuration
    pub fn evaluation_config(&self) -> Result<EvaluationConfig, prng_stats::ConfigError> {
        EvaluationConfig::builder()
            .n_samples(self.evaluation.samples)
            .bins(self.evaluation.bins)
            .chi2_critical(self.evaluation.chi2_critical)
            .z_critical(self.evaluation.z_critical)
            .autocorr_k(self.evaluation.autocorr_k)
            .build()
    }

    /// Validated Monte Carlo configuration
    pub fn integration_config(&self) -> Result<IntegrationConfig, prng_montecarlo::ConfigError> {
        IntegrationConfig::builder()
            .n_samples(self.integration.samples)
            .z_critical(self.integration.z_critical)
            .build()
    }
}

fn parse_env(key: &str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{key}={value:?} is not a non-negative integer")))
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: PathBuf,
    /// Log level override
    pub log_level: Option<String>,
    /// Evaluation sample count override
    pub samples: Option<usize>,
    /// Bin count override
    pub bins: Option<usize>,
    /// Monte Carlo sample count override
    pub mc_samples: Option<usize>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<LabConfig, ConfigError> {
    let mut config = LabConfig::load_or_default(&cli.config_file)?;
    config.apply_env()?;
    config.merge_with_cli(cli)?;
    Ok(config)
}
