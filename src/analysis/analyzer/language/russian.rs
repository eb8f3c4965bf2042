use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::cyrillic::CyrillicFilter;
use crate::analysis::token_filter::length::{DEFAULT_MIN_WORD_LENGTH, LengthFilter};
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;

/// Cleans one line of Russian text into candidate words.
///
/// Every word it emits is lowercase Cyrillic (`а`..`я`, `ё`), at least
/// `min_length` characters long and not a stop word. Blank or
/// non-Cyrillic lines produce no words.
pub struct RussianAnalyzer {
    inner: PipelineAnalyzer,
    stop_filter: StopFilter,
    min_length: usize,
}

impl RussianAnalyzer {
    pub fn new() -> Result<Self> {
        Self::with_options(StopFilter::russian(), DEFAULT_MIN_WORD_LENGTH)
    }

    pub fn with_stop_filter(stop_filter: StopFilter) -> Result<Self> {
        Self::with_options(stop_filter, DEFAULT_MIN_WORD_LENGTH)
    }

    pub fn with_options(stop_filter: StopFilter, min_length: usize) -> Result<Self> {
        let tokenizer = Arc::new(WhitespaceTokenizer::new());
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::non_cyrillic()?))
            .add_filter(Arc::new(LengthFilter::new(min_length)))
            .add_filter(Arc::new(stop_filter.clone()))
            .add_filter(Arc::new(CyrillicFilter::new()))
            .with_name("russian");

        Ok(Self {
            inner: analyzer,
            stop_filter,
            min_length,
        })
    }

    /// Clean a line and collect the surviving words.
    pub fn clean(&self, line: &str) -> Result<Vec<String>> {
        Ok(self.analyze(line)?.map(|token| token.into_text()).collect())
    }

    pub fn stop_filter(&self) -> &StopFilter {
        &self.stop_filter
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Analyzer for RussianAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "russian"
    }
}

impl Debug for RussianAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RussianAnalyzer")
            .field("inner", &self.inner)
            .field("stop_words", &self.stop_filter.len())
            .field("min_length", &self.min_length)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::cyrillic::is_cyrillic_word;

    #[test]
    fn test_russian_analyzer() {
        let analyzer = RussianAnalyzer::new().unwrap();

        let words = analyzer.clean("Привет, мир! 123 Hello").unwrap();

        assert_eq!(words, vec!["привет", "мир"]);
    }

    #[test]
    fn test_stop_words_and_short_words_removed() {
        let analyzer = RussianAnalyzer::new().unwrap();

        let words = analyzer
            .clean("Когда он вернулся домой, было уже ТЕМНО и тихо.")
            .unwrap();

        assert_eq!(words, vec!["вернулся", "домой", "темно", "тихо"]);
    }

    #[test]
    fn test_blank_and_foreign_lines() {
        let analyzer = RussianAnalyzer::new().unwrap();

        assert!(analyzer.clean("").unwrap().is_empty());
        assert!(analyzer.clean("   \t  ").unwrap().is_empty());
        assert!(analyzer.clean("The quick brown fox, 1999!").unwrap().is_empty());
    }

    #[test]
    fn test_words_glued_by_punctuation_are_split() {
        let analyzer = RussianAnalyzer::new().unwrap();

        let words = analyzer.clean("север-юг;запад...восток").unwrap();

        assert_eq!(words, vec!["север", "запад", "восток"]);
    }

    #[test]
    fn test_mixed_script_tokens_are_split() {
        let analyzer = RussianAnalyzer::new().unwrap();

        // Latin letters become separators, so the Cyrillic halves survive on their own
        let words = analyzer.clean("словоword ёжикиX").unwrap();

        assert_eq!(words, vec!["слово", "ёжики"]);
    }

    #[test]
    fn test_output_invariants() {
        let analyzer = RussianAnalyzer::new().unwrap();
        let lines = [
            "В начале было Слово, и Слово было у Бога.",
            "Она сказала: «Нет!» — и ушла в 1917 году.",
            "ЁЖИК в тумане; no english here 42",
        ];

        for line in lines {
            let tokens: Vec<Token> = analyzer.analyze(line).unwrap().collect();
            for token in tokens {
                assert!(token.char_len() > 2, "{}", token.text);
                assert!(is_cyrillic_word(&token.text), "{}", token.text);
                assert!(!analyzer.stop_filter().is_stop_word(&token.text));
            }
        }
    }

    #[test]
    fn test_analysis_is_repeatable() {
        let analyzer = RussianAnalyzer::new().unwrap();
        let line = "Повторный анализ даёт тот же результат";

        assert_eq!(analyzer.clean(line).unwrap(), analyzer.clean(line).unwrap());
    }

    #[test]
    fn test_custom_options() {
        let analyzer =
            RussianAnalyzer::with_options(StopFilter::from_words(vec!["кот"]), 2).unwrap();

        let words = analyzer.clean("кот и пёс да ёж").unwrap();

        assert_eq!(words, vec!["пёс", "да", "ёж"]);
        assert_eq!(analyzer.min_length(), 2);
    }

    #[test]
    fn test_russian_analyzer_name() {
        let analyzer = RussianAnalyzer::new().unwrap();

        assert_eq!(analyzer.name(), "russian");
    }
}
