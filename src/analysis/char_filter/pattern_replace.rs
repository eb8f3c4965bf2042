use regex::Regex;

use super::CharFilter;
use crate::error::{ChastotaError, Result};

/// Everything that is not a lowercase Cyrillic letter or whitespace.
pub const NON_CYRILLIC_PATTERN: &str = r"[^а-яё\s]";

/// A char filter that replaces characters matching a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .map_err(|e| ChastotaError::analysis(format!("Invalid regex pattern: {e}")))?,
            replacement: replacement.to_string(),
        })
    }

    /// Replace every character outside `[а-яё]` and whitespace with a single space.
    ///
    /// Digits, punctuation and Latin letters all become separators.
    pub fn non_cyrillic() -> Result<Self> {
        Self::new(NON_CYRILLIC_PATTERN, " ")
    }

    /// Get the regex pattern used by this filter.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
