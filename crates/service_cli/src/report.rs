//! Text and JSON rendering of lab results
//!
//! Every renderer returns a `String`; [`emit`] decides whether it goes to
//! stdout or a file.

use std::fmt::Write as _;
use std::path::Path;

use clap::ValueEnum;
use prng_montecarlo::{IntegrationConfig, SuiteReport};
use prng_stats::{EvaluationConfig, GeneratorEvaluation, Statistic};
use serde_json::json;

use crate::Result;

/// Output format for result-producing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// Pretty-printed JSON document
    Json,
}

const HISTOGRAM_WIDTH: usize = 40;

fn verdict(pass: bool) -> &'static str {
    if pass {
        "OK"
    } else {
        "FAIL"
    }
}

fn tick(pass: bool) -> &'static str {
    if pass {
        "✓"
    } else {
        "✗"
    }
}

fn fixed(stat: Statistic, decimals: usize) -> String {
    match stat {
        Statistic::Defined(v) => format!("{:.*}", decimals, v),
        Statistic::Undefined => "n/a".to_string(),
    }
}

fn p_value(stat: Statistic) -> String {
    match stat {
        Statistic::Defined(p) if p < 1e-3 => "<0.001".to_string(),
        other => fixed(other, 3),
    }
}

/// Hypothesis-test table, one row per generator
pub fn evaluation_table(results: &[GeneratorEvaluation], config: &EvaluationConfig) -> String {
    let name_w = results
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);
    let period_w = results
        .iter()
        .map(|r| r.period_note.unwrap_or("n/a").chars().count())
        .max()
        .unwrap_or(0)
        .max(6);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Hypothesis tests: N={}, bins={} (χ² < {:.2}, |Z| ≤ {:.2}, |ρ̂1| ≤ {:.1}/√N)",
        config.n_samples(),
        config.bins(),
        config.chi2_critical(),
        config.z_critical(),
        config.autocorr_k(),
    );
    let _ = writeln!(
        out,
        "{:<name_w$}  {:<period_w$}  {:>9}  {:>3}  {:<7}  {:>7}  {:>6}  {:<8}  {:>7}  {:<10}",
        "PRNG", "Period", "χ²", "df", "χ²<crit", "Z", "p", "|Z|≤crit", "ρ1", "|ρ1|≤k/√N",
    );
    let _ = writeln!(out, "{}", "-".repeat(name_w + period_w + 73));

    for r in results {
        let e = &r.evaluation;
        let _ = writeln!(
            out,
            "{:<name_w$}  {:<period_w$}  {:>9}  {:>3}  {:<7}  {:>7}  {:>6}  {:<8}  {:>7}  {:<10}",
            r.label,
            r.period_note.unwrap_or("n/a"),
            fixed(e.chi_square.statistic, 2),
            e.chi_square.df,
            verdict(e.pass_chi2),
            fixed(e.runs.z, 2),
            p_value(e.runs.p_value),
            verdict(e.pass_runs),
            fixed(e.autocorr, 3),
            verdict(e.pass_autocorr),
        );
    }
    out
}

/// Verdict comparison of one generator against the library baselines
pub fn comparison_table(results: &[GeneratorEvaluation], focus: &str) -> String {
    let keep = |r: &&GeneratorEvaluation| {
        r.label.eq_ignore_ascii_case(focus)
            || matches!(
                r.kind,
                Some(prng_core::GeneratorKind::Std) | Some(prng_core::GeneratorKind::Os)
            )
    };

    let mut out = String::new();
    let _ = writeln!(out, "Comparison: {} vs std vs os", focus);
    let _ = writeln!(out, "{:<16}  {:<6}  {:<6}  {:<6}", "PRNG", "χ²", "runs", "ρ̂1");
    for r in results.iter().filter(keep) {
        let e = &r.evaluation;
        let _ = writeln!(
            out,
            "{:<16}  {:<6}  {:<6}  {:<6}",
            r.label,
            tick(e.pass_chi2),
            tick(e.pass_runs),
            tick(e.pass_autocorr),
        );
    }
    out
}

/// Horizontal text histogram of the chi-square bin counts
pub fn histogram(result: &GeneratorEvaluation) -> String {
    let counts = result.evaluation.bin_counts();
    let bins = counts.len();
    let max = counts.iter().copied().max().unwrap_or(0).max(1);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Histogram ({}), expected {:.1} per bin",
        result.label, result.evaluation.chi_square.expected
    );
    for (k, &count) in counts.iter().enumerate() {
        let lo = k as f64 / bins as f64;
        let hi = (k + 1) as f64 / bins as f64;
        let bar = (count as usize * HISTOGRAM_WIDTH).div_ceil(max as usize);
        let _ = writeln!(
            out,
            "[{:.3}, {:.3}) {:<HISTOGRAM_WIDTH$} {}",
            lo,
            hi,
            "#".repeat(bar),
            count
        );
    }
    out
}

/// JSON summary with results and thresholds
pub fn evaluation_json(
    results: &[GeneratorEvaluation],
    config: &EvaluationConfig,
) -> Result<String> {
    let doc = json!({
        "results": results,
        "thresholds": config,
    });
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Monte Carlo estimates with intervals and coverage
pub fn integration_table(reports: &[SuiteReport], config: &IntegrationConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "[N={}] Monte Carlo: estimate ± {:.2}·SE (relative error, SE) and coverage of the exact value",
        config.n_samples(),
        config.z_critical(),
    );
    for report in reports {
        let _ = writeln!(out, "- {}", report.label);
        for entry in &report.entries {
            let integral = format!("∫_{}^{} {} dx", entry.a, entry.b, entry.formula);
            let r = &entry.result;
            let err = entry
                .relative_error
                .map_or_else(|| "n/a".to_string(), |e| format!("{:.2e}", e));
            let cover = entry.covered.map_or("?", tick);
            let _ = writeln!(
                out,
                "  {:<18} ≈ {:.6}  [{:.6}, {:.6}]  (err {}, SE {:.2e})  cover {}",
                integral, r.estimate, r.ci_low, r.ci_high, err, r.std_error, cover
            );
        }
    }
    out
}

/// JSON document for the Monte Carlo suite
pub fn integration_json(reports: &[SuiteReport], config: &IntegrationConfig) -> Result<String> {
    let theory: serde_json::Map<String, serde_json::Value> = prng_montecarlo::reference_integrands()
        .iter()
        .filter_map(|i| i.theoretical.map(|t| (i.name.to_string(), json!(t))))
        .collect();
    let doc = json!({
        "N": config.n_samples(),
        "z_critical": config.z_critical(),
        "theory": theory,
        "rows": reports,
    });
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Write rendered output to `path`, or stdout when absent
pub fn emit(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)?;
            tracing::info!("Wrote {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}
