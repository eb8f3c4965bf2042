//! Command line argument parsing using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::pipeline::config::AnalysisConfig;

/// Corpus read when no input is given.
pub const DEFAULT_INPUT: &str = "dataset.txt";

/// Chastota - word frequency analysis for Russian text
#[derive(Parser, Debug, Clone)]
#[command(name = "chastota")]
#[command(about = "Word frequency and stemming report for a Russian text corpus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ChastotaArgs {
    /// Text file to analyze, one or more sentences per line
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Number of entries in each most/least common ranking
    #[arg(short = 'k', long)]
    pub limit: Option<usize>,

    /// Worker threads (default: number of CPU cores)
    #[arg(short, long, env = "CHASTOTA_THREADS")]
    pub threads: Option<usize>,

    /// Additional stop words file, one word per line
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl ChastotaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Resolve the run configuration.
    ///
    /// Flags override the `--config` file, which overrides the defaults.
    pub fn to_config(&self) -> Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::from_json_file(path)?,
            None => AnalysisConfig::default(),
        };

        if let Some(limit) = self.limit {
            config = config.with_limit(limit);
        }
        if let Some(threads) = self.threads {
            config = config.with_thread_pool_size(threads);
        }
        if let Some(path) = &self.stopwords {
            config = config.with_stopwords_file(path.clone());
        }

        config.validate()?;
        Ok(config)
    }
}
