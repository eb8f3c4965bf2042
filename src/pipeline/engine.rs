//! Pipeline orchestration: load, clean, count, rank, stem, re-count.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::language::russian::RussianAnalyzer;
use crate::analysis::token_filter::stem::{StemFilter, Stemmer};
use crate::analysis::token_filter::stop::StopFilter;
use crate::error::{ChastotaError, Result};
use crate::frequency::ranker::{RankedEntry, Ranker, RarityList, vocabulary_reduction};
use crate::frequency::table::FrequencyTable;
use crate::pipeline::config::AnalysisConfig;

/// Counts and rankings for one pass (original or stemmed words).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageResult {
    /// Distinct words in this pass.
    pub unique_words: usize,
    /// Most frequent words, highest count first.
    pub top: Vec<RankedEntry>,
    /// Rarest words.
    pub rarest: RarityList,
}

impl StageResult {
    fn from_table(table: &FrequencyTable, ranker: &Ranker) -> Self {
        Self {
            unique_words: table.len(),
            top: ranker.top(table),
            rarest: ranker.rarest(table),
        }
    }

    /// The single most frequent entry, if any.
    pub fn most_common(&self) -> Option<&RankedEntry> {
        self.top.first()
    }
}

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// The corpus file, when the run read one.
    pub source: Option<PathBuf>,
    /// Number of input lines.
    pub lines: usize,
    /// Words that survived cleaning.
    pub total_words: u64,
    /// Ranking size used.
    pub limit: usize,
    pub original: StageResult,
    pub stemmed: StageResult,
    /// Percentage decrease of distinct words after stemming.
    pub vocabulary_reduction: f64,
}

/// Runs the five analysis stages over a corpus.
pub struct AnalysisPipeline {
    config: AnalysisConfig,
    analyzer: Arc<RussianAnalyzer>,
    stem_filter: StemFilter,
    ranker: Ranker,
    thread_pool: Arc<ThreadPool>,
}

impl AnalysisPipeline {
    /// Create a pipeline, loading extra stop words and starting the thread pool.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;

        let mut stop_filter = StopFilter::russian();
        if let Some(path) = &config.stopwords_file {
            stop_filter = stop_filter.extend_from_file(path)?;
        }
        let analyzer = RussianAnalyzer::with_options(stop_filter, config.min_word_length)?;

        let thread_pool_size = config.effective_threads();
        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(thread_pool_size)
            .thread_name(|i| format!("chastota-worker-{i}"))
            .build()
            .map_err(|e| ChastotaError::internal(format!("Failed to create thread pool: {e}")))?;

        debug!(
            "Pipeline ready: {analyzer:?}, {thread_pool_size} threads, limit {}",
            config.limit
        );

        Ok(Self {
            ranker: Ranker::new(config.limit),
            config,
            analyzer: Arc::new(analyzer),
            stem_filter: StemFilter::new(),
            thread_pool: Arc::new(thread_pool),
        })
    }

    /// Get the configuration of this pipeline.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a corpus file.
    ///
    /// Fails with [`ChastotaError::InputNotFound`] when the file is missing
    /// and [`ChastotaError::EmptyCorpus`] when no word survives cleaning.
    pub fn run<P: AsRef<Path>>(&self, path: P) -> Result<Analysis> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ChastotaError::InputNotFound(path.to_path_buf()));
        }

        let lines = read_lines(path)?;
        info!("File loaded: {} ({} lines)", path.display(), lines.len());

        let mut analysis = self.analyze_lines(&lines)?;
        analysis.source = Some(path.to_path_buf());
        Ok(analysis)
    }

    /// Analyze an in-memory corpus, one entry per line.
    pub fn analyze_lines<S>(&self, lines: &[S]) -> Result<Analysis>
    where
        S: AsRef<str> + Sync,
    {
        self.thread_pool.install(|| {
            let words = self.clean(lines)?;
            let total_words = words.len() as u64;
            info!("Total words after cleaning: {total_words}");
            if words.is_empty() {
                return Err(ChastotaError::EmptyCorpus);
            }

            let word_counts = FrequencyTable::par_from_words(&words);
            info!("Unique words: {}", word_counts.len());
            let original = StageResult::from_table(&word_counts, &self.ranker);

            let stemmed_words = self.stem(&words);
            let stemmed_counts = FrequencyTable::par_from_words(&stemmed_words);
            info!("Unique words after stemming: {}", stemmed_counts.len());
            let stemmed = StageResult::from_table(&stemmed_counts, &self.ranker);

            let reduction = vocabulary_reduction(original.unique_words, stemmed.unique_words);

            Ok(Analysis {
                source: None,
                lines: lines.len(),
                total_words,
                limit: self.ranker.limit(),
                original,
                stemmed,
                vocabulary_reduction: reduction,
            })
        })
    }

    fn clean<S>(&self, lines: &[S]) -> Result<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        let per_line: Vec<Vec<String>> = lines
            .par_iter()
            .map(|line| self.analyzer.clean(line.as_ref()))
            .collect::<Result<_>>()?;

        Ok(per_line.into_iter().flatten().collect())
    }

    fn stem(&self, words: &[String]) -> Vec<String> {
        let stemmer = self.stem_filter.stemmer();
        words
            .par_iter()
            .map(|word| stemmer.stem(word))
            .collect()
    }
}

/// Read a file line by line, replacing invalid UTF-8 sequences.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        lines.push(line.trim_end_matches(['\n', '\r']).to_string());
    }

    Ok(lines)
}
