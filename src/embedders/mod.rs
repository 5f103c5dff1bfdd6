//! Similarity backends
//!
//! Provides the trait the benchmark scores against and the word-vector
//! implementation used by the CLI:
//! - any `Fn(&str, &str, Language) -> f64`
//! - `WordVectors` (labels + vectors text files)

pub mod traits;
pub mod word_vectors;

pub use traits::{measure_sync, SimilarityBackend};
pub use word_vectors::{WordVectors, DEFAULT_LANGUAGE};
