//! Similarity backend abstraction
//!
//! Defines the interface the benchmark uses to query a word-embedding model.

use anyhow::Result;
use std::time::Duration;

use crate::datasets::Language;

/// Unified trait for similarity backends
///
/// The benchmark treats the model as an opaque capability: it only asks for
/// the similarity of two words, optionally in a given language. Out-of-vocabulary
/// words should yield `0.0` rather than an error.
pub trait SimilarityBackend {
    /// Similarity of two words (cosine for vector models)
    fn similarity(&self, word1: &str, word2: &str, language: Language) -> Result<f64>;
}

/// Plain functions and closures work as backends
impl<F> SimilarityBackend for F
where
    F: Fn(&str, &str, Language) -> f64,
{
    fn similarity(&self, word1: &str, word2: &str, language: Language) -> Result<f64> {
        Ok(self(word1, word2, language))
    }
}

/// Helper to measure duration of a sync operation
pub fn measure_sync<F, T>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = std::time::Instant::now();
    let result = f();
    let duration = start.elapsed();
    (result, duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_backend() {
        let backend = |w1: &str, w2: &str, _lang: Language| (w1.len() + w2.len()) as f64;
        let score = backend.similarity("cat", "horse", Language::Unspecified).unwrap();
        assert_eq!(score, 8.0);
    }

    #[test]
    fn test_closure_backend_sees_language() {
        let backend = |_: &str, _: &str, lang: Language| if lang == Language::Tag("de") { 1.0 } else { 0.0 };
        assert_eq!(backend.similarity("a", "b", Language::Tag("de")).unwrap(), 1.0);
        assert_eq!(backend.similarity("a", "b", Language::Unspecified).unwrap(), 0.0);
    }

    #[test]
    fn test_measure_sync() {
        let (value, duration) = measure_sync(|| 40 + 2);
        assert_eq!(value, 42);
        assert!(duration < Duration::from_secs(5));
    }
}
