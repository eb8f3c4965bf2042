//! Configuration for analysis runs.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::length::DEFAULT_MIN_WORD_LENGTH;
use crate::error::{ChastotaError, Result};

/// Default number of entries in every ranking.
pub const DEFAULT_LIMIT: usize = 50;

/// Configuration for an analysis run.
///
/// Missing fields in a JSON config file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of entries in each most/least frequent ranking.
    pub limit: usize,

    /// Minimum word length in characters.
    pub min_word_length: usize,

    /// Thread pool size for the parallel stages.
    /// If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,

    /// Extra stop words, one per line, merged into the built-in list.
    pub stopwords_file: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            thread_pool_size: None,
            stopwords_file: None,
        }
    }
}

impl AnalysisConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: AnalysisConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Set the ranking size.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the minimum word length.
    pub fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }

    /// Set the thread pool size.
    pub fn with_thread_pool_size(mut self, threads: usize) -> Self {
        self.thread_pool_size = Some(threads);
        self
    }

    /// Set an additional stop word file.
    pub fn with_stopwords_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.stopwords_file = Some(path.into());
        self
    }

    /// Thread pool size to use, resolving the CPU-count default.
    pub fn effective_threads(&self) -> usize {
        self.thread_pool_size.unwrap_or_else(num_cpus::get)
    }

    /// Check that all values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(ChastotaError::config("limit must be at least 1"));
        }
        if self.min_word_length == 0 {
            return Err(ChastotaError::config("min_word_length must be at least 1"));
        }
        if self.thread_pool_size == Some(0) {
            return Err(ChastotaError::config("thread_pool_size must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();

        assert_eq!(config.limit, 50);
        assert_eq!(config.min_word_length, 3);
        assert_eq!(config.thread_pool_size, None);
        assert!(config.stopwords_file.is_none());
        assert!(config.validate().is_ok());
        assert!(config.effective_threads() >= 1);
    }

    #[test]
    fn test_builders() {
        let config = AnalysisConfig::default()
            .with_limit(10)
            .with_min_word_length(4)
            .with_thread_pool_size(2)
            .with_stopwords_file("extra.txt");

        assert_eq!(config.limit, 10);
        assert_eq!(config.min_word_length, 4);
        assert_eq!(config.effective_threads(), 2);
        assert_eq!(config.stopwords_file, Some(PathBuf::from("extra.txt")));
    }

    #[test]
    fn test_validation() {
        assert!(AnalysisConfig::default().with_limit(0).validate().is_err());
        assert!(
            AnalysisConfig::default()
                .with_thread_pool_size(0)
                .validate()
                .is_err()
        );
        assert!(
            AnalysisConfig::default()
                .with_min_word_length(0)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"limit": 20, "thread_pool_size": 3}}"#).unwrap();
        file.flush().unwrap();

        let config = AnalysisConfig::from_json_file(file.path()).unwrap();

        assert_eq!(config.limit, 20);
        assert_eq!(config.thread_pool_size, Some(3));
        assert_eq!(config.min_word_length, 3);
    }

    #[test]
    fn test_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "limit = 20").unwrap();
        file.flush().unwrap();

        let err = AnalysisConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, ChastotaError::Json(_)));
    }
}
