//! Benchmark infrastructure
//!
//! Scores a similarity backend against human judgments.
//!
//! ## Usage
//!
//! ```bash
//! wordsim-benchmark labels.txt vectors.txt [replacements.json]
//! ```
//!
//! ## Modules
//!
//! - `correlation` - Spearman rank correlation of predictions vs gold scores
//! - `interval` - Fisher z-transform 95% confidence interval
//! - `runner` - Per-dataset evaluation and the report loop

pub mod correlation;
pub mod interval;
pub mod runner;

pub use correlation::{evaluate, pearson_correlation, rank_average_ties, spearman_correlation};
pub use interval::{confidence_interval, ConfidenceInterval};
pub use runner::{evaluate_benchmark, run_all, EvaluationResult, RunOptions, RunSummary};
