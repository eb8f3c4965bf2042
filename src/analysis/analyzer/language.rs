//! Language-specific analyzers.
//!
//! # Available Languages
//!
//! - [`russian`] - Russian corpus cleaning: lowercase, strip everything but
//!   Cyrillic letters, drop short words and stop words

pub mod russian;
