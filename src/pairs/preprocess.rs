//! Per-word preprocessing applied by the pair parser

/// Word preprocessing strategy for a benchmark
///
/// - `None`: words are used as written
/// - `StripPosSuffix`: drops a hyphen-joined part-of-speech tag (`plant-n` → `plant`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WordPreprocess {
    #[default]
    None,
    StripPosSuffix,
}

impl WordPreprocess {
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::StripPosSuffix => "strip-pos-suffix",
        }
    }

    /// Apply the strategy to a single word
    pub fn apply(&self, word: &str) -> String {
        match self {
            Self::None => word.to_string(),
            // Everything before the first hyphen; the whole word if there is none
            Self::StripPosSuffix => word.split('-').next().unwrap_or(word).to_string(),
        }
    }
}
