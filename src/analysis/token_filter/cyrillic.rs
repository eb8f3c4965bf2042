//! Cyrillic filter implementation.

use super::Filter;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Check whether a character is a lowercase Russian letter (`а`..`я` or `ё`).
pub fn is_lowercase_cyrillic(c: char) -> bool {
    matches!(c, 'а'..='я' | 'ё')
}

/// Check whether a word is non-empty and made only of lowercase Russian letters.
pub fn is_cyrillic_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(is_lowercase_cyrillic)
}

/// A filter that keeps only tokens consisting entirely of lowercase Cyrillic letters.
#[derive(Clone, Debug, Default)]
pub struct CyrillicFilter;

impl CyrillicFilter {
    /// Create a new Cyrillic filter.
    pub fn new() -> Self {
        CyrillicFilter
    }
}

impl Filter for CyrillicFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.filter(|token| is_cyrillic_word(&token.text))))
    }

    fn name(&self) -> &'static str {
        "cyrillic"
    }
}
