//! Configuration for the word-similarity benchmark
//!
//! Defines the `wordsim.toml` schema. The file is optional: when it is absent
//! the benchmark reads its datasets from `./data` and stops at the first
//! failing dataset.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "wordsim.toml";

/// Harness configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HarnessConfig {
    /// Directory that benchmark source paths are resolved against
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Continue with the next dataset when one fails
    #[serde(default)]
    pub keep_going: bool,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            keep_going: false,
        }
    }
}

impl HarnessConfig {
    /// Load config from TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {:?}", path))?;
        Ok(config)
    }

    /// Load from default location (./wordsim.toml) or return defaults
    pub fn load_default() -> Result<Self> {
        let local_path = Path::new(DEFAULT_CONFIG_FILE);
        if local_path.exists() {
            return Self::load(local_path);
        }
        Ok(Self::default())
    }

    /// Resolve a benchmark source path against the data directory
    pub fn resolve(&self, source: &str) -> PathBuf {
        self.data_dir.join(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = HarnessConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert!(!config.keep_going);
    }

    #[test]
    fn test_config_toml() {
        let toml_str = r#"
data_dir = "/srv/wordsim/data"
keep_going = true
"#;
        let config: HarnessConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/wordsim/data"));
        assert!(config.keep_going);
    }

    #[test]
    fn test_config_toml_partial() {
        let config: HarnessConfig = toml::from_str("keep_going = true").unwrap();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert!(config.keep_going);
    }

    #[test]
    fn test_config_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "data_dir = \"bench\"").unwrap();

        let config = HarnessConfig::load(file.path()).unwrap();
        assert_eq!(config.resolve("heldout/rw.csv"), PathBuf::from("bench/heldout/rw.csv"));
    }

    #[test]
    fn test_config_load_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "keep_going = \"maybe\"").unwrap();

        let err = HarnessConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
