//! Core analyzer trait definition.
//!
//! Analyzers combine char filters, a tokenizer and token filters into the
//! complete transformation from a raw line to cleaned words:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Counting
//!             ↓
//!         Char Filters
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`RussianAnalyzer`](super::language::russian::RussianAnalyzer) - Russian corpus cleaning
//!
//! # Examples
//!
//! ```
//! use chastota::analysis::analyzer::analyzer::Analyzer;
//! use chastota::analysis::analyzer::language::russian::RussianAnalyzer;
//!
//! let analyzer = RussianAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Привет, мир!").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "привет");
//! assert_eq!(tokens[1].text, "мир");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// # Thread Safety
///
/// The trait requires `Send + Sync` so that a single analyzer can be shared
/// by every worker of the cleaning stage.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// Calling `analyze` twice on the same text yields the same tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
