//! Error types for the evaluation core
//!
//! The parser, the statistics and the report driver return [`EvalError`].
//! The CLI and the word-vector loader work in `anyhow::Result` and attach
//! context (dataset name, file) on the way up.

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while evaluating a benchmark
#[derive(Error, Debug)]
pub enum EvalError {
    /// A benchmark source file does not exist
    #[error("Benchmark file not found: '{path}'")]
    FileNotFound { path: PathBuf },

    /// Any other I/O failure while reading a benchmark file
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A malformed line in a benchmark file
    #[error("{path}:{line_number}: {reason} (line: {line:?})")]
    Parse {
        path: PathBuf,
        line_number: usize,
        line: String,
        reason: String,
    },

    /// Statistics that cannot be computed for the given input
    #[error("Undefined statistic: {reason}")]
    Domain { reason: String },

    /// Failure raised by the similarity backend, passed through unchanged
    #[error(transparent)]
    Similarity(anyhow::Error),
}

impl EvalError {
    pub(crate) fn domain(reason: impl Into<String>) -> Self {
        Self::Domain {
            reason: reason.into(),
        }
    }

    /// Short machine-readable code, used in log fields
    pub fn status_code(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => "FILE_NOT_FOUND",
            Self::Io { .. } => "IO_ERROR",
            Self::Parse { .. } => "PARSE_ERROR",
            Self::Domain { .. } => "DOMAIN_ERROR",
            Self::Similarity(_) => "SIMILARITY_ERROR",
        }
    }
}

pub type EvalResult<T> = Result<T, EvalError>;
