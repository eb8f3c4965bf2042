//! The batch analysis pipeline.
//!
//! Stages run strictly one after another over an in-memory corpus:
//!
//! ```text
//! lines → clean → count → rank
//!           └──→ stem → count → rank
//! ```
//!
//! Each stage is a pure transformation executed on a rayon thread pool;
//! the only shared state is the read-only analyzer and stemmer.

pub mod config;
pub mod engine;

pub use config::AnalysisConfig;
pub use engine::{Analysis, AnalysisPipeline, StageResult};
