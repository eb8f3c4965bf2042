//! Lowercase char filter implementation.

use super::CharFilter;

/// A char filter that lowercases the whole line and trims surrounding whitespace.
///
/// Lowercasing has to happen before any pattern that only admits lowercase
/// letters, otherwise capitalised words would be erased.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        input.trim().to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
