//! Report driver
//!
//! Runs every registry entry through parse → correlate → interval and writes
//! one tab-separated line per dataset:
//!
//! ```text
//! rg-65	0.768	(0.645 ~ 0.853)
//! ```

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use super::correlation::evaluate;
use super::interval::{confidence_interval, ConfidenceInterval};
use crate::datasets::BenchmarkSpec;
use crate::embedders::SimilarityBackend;
use crate::error::EvalResult;
use crate::pairs::read_benchmark;

/// Outcome of evaluating one benchmark
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    pub dataset_name: String,
    pub correlation: f64,
    pub interval: ConfidenceInterval,
    pub sample_size: usize,
}

impl EvaluationResult {
    /// Format as a report line (without trailing newline)
    pub fn format_line(&self) -> String {
        format!(
            "{}\t{:.3}\t({:.3} ~ {:.3})",
            self.dataset_name, self.correlation, self.interval.lower, self.interval.upper
        )
    }
}

/// Options for a full run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Skip failing datasets instead of aborting
    pub keep_going: bool,
}

/// What a full run produced
#[derive(Debug, Default)]
pub struct RunSummary {
    pub results: Vec<EvaluationResult>,
    /// Datasets skipped under `keep_going`
    pub failed: Vec<String>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Evaluate a single benchmark
pub fn evaluate_benchmark<B>(
    backend: &B,
    spec: &BenchmarkSpec,
    data_dir: &Path,
) -> EvalResult<EvaluationResult>
where
    B: SimilarityBackend + ?Sized,
{
    let pairs = read_benchmark(spec, data_dir)?;
    tracing::debug!(
        "{}: {} pairs ({} split, language {}, preprocess {})",
        spec.name,
        pairs.len(),
        spec.split().name(),
        spec.language,
        spec.preprocess.name()
    );

    let correlation = evaluate(backend, &pairs, spec.language)?;
    if correlation == 0.0 {
        tracing::warn!(
            "{}: correlation is exactly 0 (all predictions zero or uncorrelated)",
            spec.name
        );
    }

    let interval = confidence_interval(correlation, pairs.len())?;

    Ok(EvaluationResult {
        dataset_name: spec.name.to_string(),
        correlation,
        interval,
        sample_size: pairs.len(),
    })
}

/// Evaluate every benchmark in `registry` order, writing one line each to `out`
///
/// Lines are written as soon as each dataset finishes. Without `keep_going`
/// the first failure aborts the run.
pub fn run_all<B, W>(
    backend: &B,
    registry: &[BenchmarkSpec],
    data_dir: &Path,
    options: RunOptions,
    out: &mut W,
) -> Result<RunSummary>
where
    B: SimilarityBackend + ?Sized,
    W: Write,
{
    let mut summary = RunSummary::default();

    for spec in registry {
        match evaluate_benchmark(backend, spec, data_dir) {
            Ok(result) => {
                writeln!(out, "{}", result.format_line())?;
                out.flush()?;
                summary.results.push(result);
            }
            Err(e) if options.keep_going => {
                tracing::error!(
                    code = e.status_code(),
                    "Skipping dataset '{}': {}",
                    spec.name,
                    e
                );
                summary.failed.push(spec.name.to_string());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Dataset '{}' failed", spec.name));
            }
        }
    }

    Ok(summary)
}
