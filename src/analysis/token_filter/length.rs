//! Length filter implementation.

use super::Filter;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Default minimum word length: words must be longer than two characters.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// A filter that drops tokens shorter than `min_chars` characters.
///
/// Length is measured in characters, not bytes, so a three-letter Cyrillic
/// word passes a minimum of 3 even though it occupies six bytes.
#[derive(Clone, Debug)]
pub struct LengthFilter {
    min_chars: usize,
}

impl LengthFilter {
    /// Create a new length filter with the given minimum.
    pub fn new(min_chars: usize) -> Self {
        LengthFilter { min_chars }
    }

    /// Get the minimum length in characters.
    pub fn min_chars(&self) -> usize {
        self.min_chars
    }
}

impl Default for LengthFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WORD_LENGTH)
    }
}

impl Filter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_chars = self.min_chars;
        Ok(Box::new(
            tokens.filter(move |token| token.char_len() >= min_chars),
        ))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}
