//! Token filter implementations for token transformation.
//!
//! Filters receive the tokenizer's stream and drop or rewrite tokens.
//!
//! # Available Filters
//!
//! - [`length::LengthFilter`] - Drops tokens shorter than a minimum character count
//! - [`stop::StopFilter`] - Removes stop words
//! - [`cyrillic::CyrillicFilter`] - Keeps only tokens made of lowercase Cyrillic letters
//! - [`stem::StemFilter`] - Reduces words to their stem form
//!
//! # Examples
//!
//! ```
//! use chastota::analysis::token_filter::Filter;
//! use chastota::analysis::token_filter::length::LengthFilter;
//! use chastota::analysis::token::Token;
//!
//! let filter = LengthFilter::new(3);
//! let tokens = vec![Token::new("он", 0), Token::new("мир", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].text, "мир");
//! ```
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Length → Stop Words → Cyrillic → (Stemmer)
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
/// Implementations should stay lazy where they can: the returned stream is
/// consumed by the caller, usually straight into a word vector.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use chastota::analysis::token::{Token, TokenStream};
/// use chastota::analysis::token_filter::Filter;
/// use chastota::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         Ok(Box::new(tokens.map(|t| {
///             let reversed: String = t.text.chars().rev().collect();
///             t.with_text(reversed)
///         })))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod cyrillic;
pub mod length;
pub mod stem;
pub mod stop;
