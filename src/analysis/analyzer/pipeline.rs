//! Analyzer assembled from char filters, a tokenizer and token filters.
//!
//! A line passes through every char filter in insertion order, is split by
//! the tokenizer, and the resulting stream is threaded through the token
//! filters, again in insertion order.
//!
//! ```
//! use std::sync::Arc;
//!
//! use chastota::analysis::analyzer::analyzer::Analyzer;
//! use chastota::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use chastota::analysis::char_filter::lowercase::LowercaseCharFilter;
//! use chastota::analysis::token_filter::stop::StopFilter;
//! use chastota::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
//!     .add_char_filter(Arc::new(LowercaseCharFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["и"])));
//!
//! let words: Vec<String> = analyzer
//!     .analyze("Кошка И собака")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(words, ["кошка", "собака"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Char filters, one tokenizer and a chain of token filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Start a pipeline around `tokenizer` with no filters.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            char_filters: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Append a char filter.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Append a token filter.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Rename the pipeline; shows up in `Debug` output.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// The pipeline's name.
    pub fn pipeline_name(&self) -> &str {
        &self.name
    }

    /// Number of char filters and token filters, in that order.
    pub fn stage_counts(&self) -> (usize, usize) {
        (self.char_filters.len(), self.filters.len())
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let normalized = self
            .char_filters
            .iter()
            .fold(text.to_string(), |line, char_filter| char_filter.filter(&line));

        self.filters
            .iter()
            .try_fold(self.tokenizer.tokenize(&normalized)?, |tokens, filter| {
                filter.filter(tokens)
            })
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
    use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::length::LengthFilter;
    use crate::analysis::token_filter::stop::StopFilter;
    use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

    #[test]
    fn test_pipeline_analyzer() {
        let tokenizer = Arc::new(WhitespaceTokenizer::new());
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LengthFilter::new(3)))
            .add_filter(Arc::new(StopFilter::from_words(vec!["когда"])));

        let tokens: Vec<Token> = analyzer
            .analyze("он пришёл когда стемнело")
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "пришёл");
        assert_eq!(tokens[1].text, "стемнело");
    }

    #[test]
    fn test_char_filters_run_in_order() {
        // Lowercasing first keeps capitalised words alive through the pattern
        let tokenizer = Arc::new(WhitespaceTokenizer::new());
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::non_cyrillic().unwrap()));

        let tokens: Vec<Token> = analyzer.analyze("Москва,Россия").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "москва");
        assert_eq!(tokens[1].text, "россия");
    }

    #[test]
    fn test_debug_lists_components() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LengthFilter::default()))
            .with_name("debug_me");

        let debug = format!("{analyzer:?}");
        assert!(debug.contains("debug_me"));
        assert!(debug.contains("whitespace"));
        assert!(debug.contains("length"));
        assert_eq!(analyzer.pipeline_name(), "debug_me");
        assert_eq!(analyzer.stage_counts(), (0, 1));
    }
}
