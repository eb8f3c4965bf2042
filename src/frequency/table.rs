//! Frequency table construction.

use ahash::AHashMap;
use rayon::prelude::*;

/// Mapping from word to its number of occurrences.
///
/// Tables are built in one pass over a word sequence and are not updated
/// afterwards; every count is positive and `total` is the sum of all counts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: AHashMap<String, u64>,
    total: u64,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a sequence of words on the current thread.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .fold(Self::new(), |table, word| table.with_word(word.as_ref()))
    }

    /// Count a slice of words on the current rayon pool.
    ///
    /// Each worker folds its share into a private table and the partial
    /// tables are summed pairwise, so the result does not depend on how the
    /// slice was split between threads.
    pub fn par_from_words<S>(words: &[S]) -> Self
    where
        S: AsRef<str> + Sync,
    {
        words
            .par_iter()
            .fold(Self::new, |table, word| table.with_word(word.as_ref()))
            .reduce(Self::new, Self::merge)
    }

    /// Build a table from pre-aggregated `(word, count)` pairs.
    ///
    /// Repeated words have their counts summed; zero counts are ignored.
    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (word, count) in counts {
            table.add(word.into(), count);
        }
        table
    }

    /// Combine two tables by summing the counts of identical words.
    pub fn merge(self, other: Self) -> Self {
        let (mut into, from) = if self.counts.len() >= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };
        for (word, count) in from.counts {
            into.add(word, count);
        }
        into
    }

    fn with_word(mut self, word: &str) -> Self {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
            }
        }
        self.total += 1;
        self
    }

    fn add(&mut self, word: String, count: u64) {
        if count == 0 {
            return;
        }
        *self.counts.entry(word).or_insert(0) += count;
        self.total += count;
    }

    /// Occurrences of `word`, if it was seen.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the table holds no words.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted sequence.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of words that occur exactly once.
    pub fn singletons(&self) -> usize {
        self.counts.values().filter(|&&count| count == 1).count()
    }

    /// Iterate over `(word, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
