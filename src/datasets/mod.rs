//! Benchmark registry
//!
//! The fixed catalog of word-similarity datasets evaluated on every run.
//!
//! ## Dataset Families
//!
//! Most families are listed at three granularities so that scores can be
//! compared across splits:
//!
//! - `-dev`: the development split
//! - `-test`: the held-out split (under `heldout/`)
//! - `-both`: dev and test concatenated, in that order
//!
//! ## File Layout
//!
//! Source paths are relative to the configured data directory:
//!
//! ```text
//! data/
//! ├── rw.csv
//! ├── men3000-dev.csv
//! ├── ws353.csv
//! ├── ...
//! └── heldout/
//!     ├── rw.csv
//!     └── men3000-test.csv
//! ```

use std::fmt;

use crate::pairs::WordPreprocess;

/// Language passed through to the similarity backend
///
/// `Unspecified` leaves the choice to the backend's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Unspecified,
    Tag(&'static str),
}

impl Language {
    /// The language tag, if one was given
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Self::Unspecified => None,
            Self::Tag(tag) => Some(tag),
        }
    }

    /// The tag, or `default` when unspecified
    pub fn tag_or(&self, default: &'static str) -> &'static str {
        self.tag().unwrap_or(default)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unspecified => f.write_str("default"),
            Self::Tag(tag) => f.write_str(tag),
        }
    }
}

/// Which split of a benchmark family an entry covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    Dev,
    Test,
    Both,
    /// The dataset ships as a single file
    Full,
}

impl Split {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Test => "test",
            Self::Both => "both",
            Self::Full => "full",
        }
    }
}

/// A benchmark definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkSpec {
    /// Name shown in the report
    pub name: &'static str,
    /// Source files, read in order as one stream
    pub sources: &'static [&'static str],
    /// Field separator; `None` splits on runs of whitespace
    pub separator: Option<char>,
    /// Applied to each word before lookup
    pub preprocess: WordPreprocess,
    /// Language passed to the similarity backend
    pub language: Language,
}

impl BenchmarkSpec {
    /// Whitespace-separated, single-language entry
    const fn plain(name: &'static str, sources: &'static [&'static str]) -> Self {
        Self {
            name,
            sources,
            separator: None,
            preprocess: WordPreprocess::None,
            language: Language::Unspecified,
        }
    }

    const fn with_separator(mut self, separator: char) -> Self {
        self.separator = Some(separator);
        self
    }

    const fn with_preprocess(mut self, preprocess: WordPreprocess) -> Self {
        self.preprocess = preprocess;
        self
    }

    const fn with_language(mut self, tag: &'static str) -> Self {
        self.language = Language::Tag(tag);
        self
    }

    /// Split covered by this entry, derived from the name suffix
    pub fn split(&self) -> Split {
        if self.name.ends_with("-dev") {
            Split::Dev
        } else if self.name.ends_with("-test") {
            Split::Test
        } else if self.name.ends_with("-both") {
            Split::Both
        } else {
            Split::Full
        }
    }
}

/// Every benchmark evaluated by a run, in report order
pub static REGISTRY: &[BenchmarkSpec] = &[
    BenchmarkSpec::plain("rw-dev", &["rw.csv"]),
    BenchmarkSpec::plain("rw-test", &["heldout/rw.csv"]),
    BenchmarkSpec::plain("rw-both", &["rw.csv", "heldout/rw.csv"]),
    BenchmarkSpec::plain("men-3000-dev", &["men3000-dev.csv"])
        .with_preprocess(WordPreprocess::StripPosSuffix),
    BenchmarkSpec::plain("men-3000-test", &["heldout/men3000-test.csv"])
        .with_preprocess(WordPreprocess::StripPosSuffix),
    BenchmarkSpec::plain("men-3000-both", &["men3000-dev.csv", "heldout/men3000-test.csv"])
        .with_preprocess(WordPreprocess::StripPosSuffix),
    BenchmarkSpec::plain("wordsim-353", &["ws353.csv"]).with_separator(','),
    BenchmarkSpec::plain("wordsim-353-es", &["ws353.es.csv"]).with_language("es"),
    BenchmarkSpec::plain("scws", &["scws-star.csv"]),
    BenchmarkSpec::plain("rg-65", &["rg-65.csv"]),
    BenchmarkSpec::plain("rg-65-de", &["rg-65.de.csv"]).with_language("de"),
    BenchmarkSpec::plain("rg-65-fr", &["rg-65.fr.csv"]).with_language("fr"),
    BenchmarkSpec::plain("mc-30", &["mc30.csv"]),
    BenchmarkSpec::plain("mc-30-es", &["mc30.es.csv"]).with_language("es"),
];

/// Look up a registry entry by name
pub fn find(name: &str) -> Option<&'static BenchmarkSpec> {
    REGISTRY.iter().find(|spec| spec.name == name)
}
