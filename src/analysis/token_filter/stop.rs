//! Stop filter implementation.
//!
//! This module provides a filter that removes high-frequency function words
//! (stop words) before counting. The built-in list covers common Russian
//! pronouns, prepositions, conjunctions and particles; it can be extended
//! from a plain-text file.
//!
//! # Examples
//!
//! ```
//! use chastota::analysis::token_filter::Filter;
//! use chastota::analysis::token_filter::stop::StopFilter;
//! use chastota::analysis::token::Token;
//!
//! let filter = StopFilter::russian();
//! let tokens = vec![
//!     Token::new("только", 0),
//!     Token::new("дорога", 1),
//!     Token::new("через", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "дорога");
//! ```

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::{Arc, LazyLock};

use log::{debug, warn};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default Russian stop words list.
const DEFAULT_RUSSIAN_STOP_WORDS: &[&str] = &[
    "и", "в", "во", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то", "все", "она",
    "так", "его", "но", "да", "ты", "к", "у", "же", "вы", "за", "бы", "по", "только", "ее",
    "мне", "было", "вот", "от", "меня", "еще", "нет", "о", "из", "ему", "теперь", "когда",
    "даже", "ну", "вдруг", "ли", "если", "уже", "или", "ни", "быть", "был", "него", "до",
    "вас", "нибудь", "опять", "уж", "вам", "ведь", "там", "потом", "себя", "ничего", "ей",
    "может", "они", "тут", "где", "есть", "надо", "ней", "для", "мы", "тебя", "их", "чем",
    "была", "сам", "чтоб", "без", "будто", "чего", "раз", "тоже", "себе", "под", "будет", "ж",
    "тогда", "кто", "этот", "того", "потому", "этого", "какой", "совсем", "ним", "здесь",
    "этом", "один", "почти", "мой", "тем", "чтобы", "нее", "сейчас", "были", "куда", "зачем",
    "всех", "никогда", "можно", "при", "наконец", "два", "об", "другой", "хоть", "после",
    "над", "больше", "тот", "через", "эти", "нас", "про", "всего", "них", "какая", "много",
    "разве", "три", "эту", "моя", "впрочем", "хорошо", "свою", "этой", "перед", "иногда",
    "лучше", "чуть", "том", "нельзя", "такой", "им", "более", "всегда", "конечно", "всю",
    "между", "это",
];

/// Default Russian stop words as a HashSet.
pub static DEFAULT_RUSSIAN_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_RUSSIAN_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
///
/// The word set sits behind an `Arc`, so cloning the filter (or handing it to
/// every worker thread) shares one read-only set instead of copying it.
///
/// # Examples
///
/// ## Custom Stop Words
///
/// ```
/// use chastota::analysis::token_filter::stop::StopFilter;
///
/// let filter = StopFilter::from_words(vec!["глава", "страница"]);
/// assert!(filter.is_stop_word("глава"));
/// assert_eq!(filter.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default Russian stop words.
    pub fn new() -> Self {
        Self::russian()
    }

    /// Create a stop filter with the built-in Russian stop word list.
    ///
    /// ```
    /// use chastota::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::russian();
    /// assert!(filter.is_stop_word("когда"));
    /// assert!(!filter.is_stop_word("привет"));
    /// ```
    pub fn russian() -> Self {
        Self::with_stop_words(DEFAULT_RUSSIAN_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Add the words listed in a file to this filter's set.
    ///
    /// The file holds one word per line. Words are trimmed and lowercased;
    /// blank lines and lines starting with `#` are ignored, and lines that
    /// contain more than one word are skipped with a warning.
    pub fn extend_from_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let mut stop_words: HashSet<String> = (*self.stop_words).clone();
        let before = stop_words.len();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            if word.split_whitespace().nth(1).is_some() {
                warn!(
                    "Skipping stopword line {} in {}: expected a single word",
                    line_num + 1,
                    path.display()
                );
                continue;
            }
            stop_words.insert(word.to_lowercase());
        }

        debug!(
            "Loaded {} additional stop words from {}",
            stop_words.len() - before,
            path.display()
        );

        Ok(Self::with_stop_words(stop_words))
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the shared stop word set.
    pub fn stop_words(&self) -> &Arc<HashSet<String>> {
        &self.stop_words
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = Arc::clone(&self.stop_words);
        Ok(Box::new(
            tokens.filter(move |token| !stop_words.contains(&token.text)),
        ))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
