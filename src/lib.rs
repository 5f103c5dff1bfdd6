//! Word-similarity benchmark library
//!
//! Scores word embeddings against human similarity judgments: Spearman rank
//! correlation per dataset, with a Fisher-z 95% confidence interval.

pub mod benchmark;
pub mod config;
pub mod datasets;
pub mod embedders;
pub mod error;
pub mod pairs;
