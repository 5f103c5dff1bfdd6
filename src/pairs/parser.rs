//! Gold-pair parser
//!
//! Reads benchmark files of the form `word1 word2 score [extra...]` and yields
//! one [`GoldPair`] per line.
//!
//! ```rust,ignore
//! let reader = parse_pairs(
//!     vec![data_dir.join("men3000-dev.csv"), data_dir.join("heldout/men3000-test.csv")],
//!     None,
//!     WordPreprocess::StripPosSuffix,
//! );
//! let pairs: Vec<GoldPair> = reader.collect::<EvalResult<_>>()?;
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use super::preprocess::WordPreprocess;
use crate::datasets::BenchmarkSpec;
use crate::error::{EvalError, EvalResult};

/// A word pair with its human-assigned similarity score
#[derive(Debug, Clone, PartialEq)]
pub struct GoldPair {
    pub word1: String,
    pub word2: String,
    pub gold_score: f64,
}

impl GoldPair {
    pub fn new(word1: impl Into<String>, word2: impl Into<String>, gold_score: f64) -> Self {
        Self {
            word1: word1.into(),
            word2: word2.into(),
            gold_score,
        }
    }
}

/// File currently being read
struct OpenSource {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line_number: usize,
}

/// Lazy reader over one or more benchmark files
///
/// Sources are read in order as one continuous stream. The reader is fused
/// after the first error.
pub struct PairReader {
    sources: std::vec::IntoIter<PathBuf>,
    current: Option<OpenSource>,
    separator: Option<char>,
    preprocess: WordPreprocess,
    failed: bool,
}

/// Start reading gold pairs from `sources`
///
/// No file is opened until the first item is requested.
pub fn parse_pairs(
    sources: Vec<PathBuf>,
    separator: Option<char>,
    preprocess: WordPreprocess,
) -> PairReader {
    PairReader {
        sources: sources.into_iter(),
        current: None,
        separator,
        preprocess,
        failed: false,
    }
}

/// Read every pair of a registry entry, resolving sources against `data_dir`
pub fn read_benchmark(spec: &BenchmarkSpec, data_dir: &Path) -> EvalResult<Vec<GoldPair>> {
    let sources = spec.sources.iter().map(|s| data_dir.join(s)).collect();
    parse_pairs(sources, spec.separator, spec.preprocess).collect()
}

fn open_source(path: PathBuf) -> EvalResult<OpenSource> {
    match File::open(&path) {
        Ok(file) => Ok(OpenSource {
            lines: BufReader::new(file).lines(),
            path,
            line_number: 0,
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(EvalError::FileNotFound { path })
        }
        Err(source) => Err(EvalError::Io { path, source }),
    }
}

impl PairReader {
    fn parse_line(&self, source: &OpenSource, raw: &str) -> EvalResult<GoldPair> {
        let line = raw.trim();
        let fields: Vec<&str> = match self.separator {
            Some(sep) => line.split(sep).collect(),
            None => line.split_whitespace().collect(),
        };

        let parse_error = |reason: String| EvalError::Parse {
            path: source.path.clone(),
            line_number: source.line_number,
            line: raw.to_string(),
            reason,
        };

        if fields.len() < 3 {
            return Err(parse_error(format!(
                "expected at least 3 fields, found {}",
                fields.len()
            )));
        }

        let score_field = fields[2].trim();
        let gold_score: f64 = score_field
            .parse()
            .map_err(|_| parse_error(format!("invalid score {:?}", score_field)))?;
        if !gold_score.is_finite() {
            return Err(parse_error(format!("non-finite score {:?}", score_field)));
        }

        Ok(GoldPair {
            word1: self.preprocess.apply(fields[0]),
            word2: self.preprocess.apply(fields[1]),
            gold_score,
        })
    }

    fn fail(&mut self, err: EvalError) -> Option<EvalResult<GoldPair>> {
        self.failed = true;
        self.current = None;
        Some(Err(err))
    }
}

impl Iterator for PairReader {
    type Item = EvalResult<GoldPair>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            if self.current.is_none() {
                let path = self.sources.next()?;
                match open_source(path) {
                    Ok(source) => self.current = Some(source),
                    Err(e) => return self.fail(e),
                }
            }

            let source = self.current.as_mut()?;
            let next_line = source.lines.next();
            source.line_number += 1;

            match next_line {
                // Exhausted: drop the handle and move to the next file
                None => self.current = None,
                Some(Err(e)) => {
                    let path = source.path.clone();
                    return self.fail(EvalError::Io { path, source: e });
                }
                Some(Ok(raw)) => {
                    if raw.trim().is_empty() {
                        continue;
                    }
                    let source = self.current.as_ref()?;
                    return match self.parse_line(source, &raw) {
                        Ok(pair) => Some(Ok(pair)),
                        Err(e) => self.fail(e),
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    fn collect(reader: PairReader) -> Vec<GoldPair> {
        reader.collect::<EvalResult<Vec<_>>>().unwrap()
    }

    #[test]
    fn test_whitespace_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "pairs.txt", "cat dog 0.8\ncar bus 0.6\n");

        let pairs = collect(parse_pairs(vec![path], None, WordPreprocess::None));
        assert_eq!(
            pairs,
            vec![GoldPair::new("cat", "dog", 0.8), GoldPair::new("car", "bus", 0.6)]
        );
    }

    #[test]
    fn test_whitespace_runs_and_tabs() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "pairs.txt", "  cat \t dog    7.5  \r\n");

        let pairs = collect(parse_pairs(vec![path], None, WordPreprocess::None));
        assert_eq!(pairs, vec![GoldPair::new("cat", "dog", 7.5)]);
    }

    #[test]
    fn test_preprocessing_applied() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "men.txt", "plant-n tree-n 0.7\n");

        let pairs = collect(parse_pairs(vec![path], None, WordPreprocess::StripPosSuffix));
        assert_eq!(pairs, vec![GoldPair::new("plant", "tree", 0.7)]);
    }

    #[test]
    fn test_separator_and_extra_fields() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "ws353.csv",
            "love,sex,6.77\nstock,live jazz,-1.5,extra,columns\n",
        );

        let pairs = collect(parse_pairs(vec![path], Some(','), WordPreprocess::None));
        assert_eq!(
            pairs,
            vec![
                GoldPair::new("love", "sex", 6.77),
                GoldPair::new("stock", "live jazz", -1.5),
            ]
        );
    }

    #[test]
    fn test_multi_source_concatenation() {
        let dir = TempDir::new().unwrap();
        let dev = write_file(&dir, "dev.txt", "a b 1\nc d 2\ne f 3\n");
        let test = write_file(&dir, "heldout/test.txt", "g h 4\ni j 5\n");

        let pairs = collect(parse_pairs(vec![dev, test], None, WordPreprocess::None));
        assert_eq!(pairs.len(), 5);
        let scores: Vec<f64> = pairs.iter().map(|p| p.gold_score).collect();
        assert_eq!(scores, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(pairs[3].word1, "g");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "pairs.txt", "a b 1\n\n   \nc d 2\n");

        let pairs = collect(parse_pairs(vec![path], None, WordPreprocess::None));
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let present = write_file(&dir, "present.txt", "a b 1\n");
        let missing = dir.path().join("missing.txt");

        let mut reader = parse_pairs(vec![present, missing.clone()], None, WordPreprocess::None);
        assert!(matches!(reader.next(), Some(Ok(_))));
        match reader.next() {
            Some(Err(EvalError::FileNotFound { path })) => assert_eq!(path, missing),
            other => panic!("expected FileNotFound, got {:?}", other),
        }
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_too_few_fields() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "pairs.txt", "a b 1\ncord smile\nc d 2\n");

        let result: EvalResult<Vec<_>> =
            parse_pairs(vec![path.clone()], None, WordPreprocess::None).collect();
        match result {
            Err(EvalError::Parse { path: p, line_number, line, .. }) => {
                assert_eq!(p, path);
                assert_eq!(line_number, 2);
                assert_eq!(line, "cord smile");
            }
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_score() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "pairs.txt", "a b high\n");

        let mut reader = parse_pairs(vec![path], None, WordPreprocess::None);
        match reader.next() {
            Some(Err(EvalError::Parse { line_number, reason, .. })) => {
                assert_eq!(line_number, 1);
                assert!(reason.contains("high"));
            }
            other => panic!("expected Parse error, got {:?}", other),
        }
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_non_finite_score_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "pairs.txt", "a b 1\nab c nan\nabc d 3\n");

        let result: EvalResult<Vec<_>> =
            parse_pairs(vec![path.clone()], None, WordPreprocess::None).collect();
        match result {
            Err(EvalError::Parse { path: p, line_number, line, reason }) => {
                assert_eq!(p, path);
                assert_eq!(line_number, 2);
                assert_eq!(line, "ab c nan");
                assert!(reason.contains("non-finite"));
            }
            other => panic!("expected Parse error, got {:?}", other),
        }

        let path = write_file(&dir, "inf.txt", "a b -inf\n");
        let mut reader = parse_pairs(vec![path], None, WordPreprocess::None);
        assert!(matches!(reader.next(), Some(Err(EvalError::Parse { .. }))));
    }

    #[test]
    fn test_reader_is_restartable_by_reopening() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "pairs.txt", "a b 1\nc d 2\n");

        let first = collect(parse_pairs(vec![path.clone()], None, WordPreprocess::None));
        let second = collect(parse_pairs(vec![path], None, WordPreprocess::None));
        assert_eq!(first, second);
    }

    #[test]
    fn test_read_benchmark_resolves_against_data_dir() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "men3000-dev.csv", "sun-n moon-n 40\n");
        write_file(&dir, "heldout/men3000-test.csv", "car-n road-n 38\n");

        let spec = crate::datasets::find("men-3000-both").unwrap();
        let pairs = read_benchmark(spec, dir.path()).unwrap();
        assert_eq!(
            pairs,
            vec![GoldPair::new("sun", "moon", 40.0), GoldPair::new("car", "road", 38.0)]
        );
    }
}
