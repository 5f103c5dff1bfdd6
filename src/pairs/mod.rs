//! Gold-pair loading
//!
//! Turns benchmark files into `(word1, word2, gold_score)` triples.
//!
//! ## File Format
//!
//! One pair per line. Fields are separated by a single character (e.g. `,`)
//! or by runs of whitespace:
//!
//! ```text
//! tiger cat 7.35
//! plant-n tree-n 0.7
//! love,sex,6.77
//! ```
//!
//! Fields after the third are ignored, so formats that carry extra metadata
//! columns parse unchanged.

pub mod parser;
pub mod preprocess;

pub use parser::{parse_pairs, read_benchmark, GoldPair, PairReader};
pub use preprocess::WordPreprocess;
