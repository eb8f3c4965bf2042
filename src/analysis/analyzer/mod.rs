//! Analyzer implementations that combine tokenizers and filters.

pub mod analyzer;
pub mod language;
pub mod pipeline;

pub use analyzer::Analyzer;
pub use language::russian::RussianAnalyzer;
pub use pipeline::PipelineAnalyzer;
