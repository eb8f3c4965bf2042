//! Word frequency tables and rankings.
//!
//! - [`table::FrequencyTable`] aggregates a word sequence into exact counts,
//!   sequentially or with a rayon fold/reduce.
//! - [`ranker::Ranker`] extracts the most and least frequent entries.
//!
//! # Examples
//!
//! ```
//! use chastota::frequency::ranker::Ranker;
//! use chastota::frequency::table::FrequencyTable;
//!
//! let table = FrequencyTable::from_words(["кот", "пёс", "кот"]);
//! let top = Ranker::new(10).top(&table);
//!
//! assert_eq!(top[0].word, "кот");
//! assert_eq!(top[0].count, 2);
//! ```

pub mod ranker;
pub mod table;

pub use ranker::{RankedEntry, Ranker, RarityList, vocabulary_reduction};
pub use table::FrequencyTable;
