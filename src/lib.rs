//! # Chastota
//!
//! Word frequency analysis for Russian text corpora.
//!
//! A run cleans every line of a corpus into lowercase Cyrillic words,
//! counts them, ranks the most and least common, reduces each word with a
//! rule-based suffix stemmer and ranks the stemmed forms again. The
//! results are laid out as a plain text report.
//!
//! ```no_run
//! use chastota::pipeline::{AnalysisConfig, AnalysisPipeline};
//!
//! # fn main() -> chastota::error::Result<()> {
//! let pipeline = AnalysisPipeline::new(AnalysisConfig::default())?;
//! let analysis = pipeline.run("dataset.txt")?;
//! println!("{}", analysis.to_report());
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod frequency;
pub mod pipeline;
pub mod report;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
