//! Text analysis module for chastota.
//!
//! This module turns raw corpus lines into the cleaned word sequence the
//! frequency stages consume. Cleaning is expressed as an analysis pipeline:
//!
//! ```text
//! Raw line → Char Filters → Tokenizer → Token Filters → Words
//! ```
//!
//! The [`RussianAnalyzer`](analyzer::language::russian::RussianAnalyzer)
//! wires the stock components together; the same stemmer that the stemming
//! stage uses is available as a token filter.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
