//! Word-Similarity Benchmark CLI
//!
//! Scores a set of word vectors against every built-in word-similarity
//! dataset and prints one line per dataset:
//!
//! ```text
//! <name>	<spearman rho>	(<low> ~ <high>)
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! ./wordsim-benchmark labels.txt vectors.txt
//!
//! # With a replacements table for terms missing from the vocabulary
//! ./wordsim-benchmark labels.txt vectors.txt replacements.json
//! ```
//!
//! ## Configuration
//!
//! An optional `wordsim.toml` in the working directory sets the data
//! directory and whether a failing dataset aborts the run:
//!
//! ```toml
//! data_dir = "data"
//! keep_going = false
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=debug` for per-dataset details.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use wordsim_benchmark::benchmark::{run_all, RunOptions};
use wordsim_benchmark::config::HarnessConfig;
use wordsim_benchmark::datasets::REGISTRY;
use wordsim_benchmark::embedders::WordVectors;

#[derive(Parser)]
#[command(name = "wordsim-benchmark")]
#[command(about = "Evaluate word vectors on word-similarity benchmarks")]
#[command(version)]
struct Cli {
    /// Term labels, one per line, aligned with the vector rows
    labels: PathBuf,

    /// Vectors, one whitespace-separated row per label
    vectors: PathBuf,

    /// Optional JSON map of term replacements
    replacements: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = HarnessConfig::load_default()?;
    tracing::debug!("Using {:?}", config);

    let vectors = WordVectors::load(&cli.labels, &cli.vectors, cli.replacements.as_deref())?;

    let stdout = std::io::stdout();
    let summary = run_all(
        &vectors,
        REGISTRY,
        &config.data_dir,
        RunOptions {
            keep_going: config.keep_going,
        },
        &mut stdout.lock(),
    )?;

    if !summary.is_success() {
        anyhow::bail!(
            "{} of {} datasets failed: {}",
            summary.failed.len(),
            REGISTRY.len(),
            summary.failed.join(", ")
        );
    }

    Ok(())
}
