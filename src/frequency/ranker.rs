//! Top-K and rarity rankings over a frequency table.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use crate::frequency::table::FrequencyTable;

/// One row of a ranking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub word: String,
    pub count: u64,
    /// Share of all counted words, in percent.
    pub percentage: f64,
}

/// The least frequent words of a table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RarityList {
    /// How many words occur exactly once.
    pub singletons: usize,
    pub entries: Vec<RankedEntry>,
}

impl RarityList {
    /// True when the entries were drawn from the words seen exactly once.
    pub fn from_singletons(&self) -> bool {
        self.singletons > 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RankOrder {
    MostFrequent,
    LeastFrequent,
}

/// A heap candidate; greater means it ranks higher.
#[derive(Debug)]
struct Candidate<'a> {
    word: &'a str,
    count: u64,
    order: RankOrder,
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate<'_> {}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_count = match self.order {
            RankOrder::MostFrequent => self.count.cmp(&other.count),
            RankOrder::LeastFrequent => other.count.cmp(&self.count),
        };
        // Ties go to the lexicographically smaller word
        by_count.then_with(|| other.word.cmp(self.word))
    }
}

/// Extracts the `limit` most and least frequent entries of a table.
///
/// Orderings are fully deterministic: most frequent is count descending
/// then word ascending, least frequent is count ascending then word
/// ascending.
#[derive(Clone, Copy, Debug)]
pub struct Ranker {
    limit: usize,
}

impl Ranker {
    /// Create a ranker that keeps at most `limit` entries.
    pub fn new(limit: usize) -> Self {
        Ranker { limit }
    }

    /// Get the maximum number of entries per ranking.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// The most frequent entries, highest count first.
    pub fn top(&self, table: &FrequencyTable) -> Vec<RankedEntry> {
        self.select(table, table.iter(), RankOrder::MostFrequent)
    }

    /// The rarest entries.
    ///
    /// If any word occurs exactly once, the list holds up to `limit` of
    /// those words in alphabetical order. Otherwise it falls back to the
    /// lowest counts, ordered by count and then by word.
    pub fn rarest(&self, table: &FrequencyTable) -> RarityList {
        let singletons = table.singletons();
        let entries = if singletons > 0 {
            self.select(
                table,
                table.iter().filter(|&(_, count)| count == 1),
                RankOrder::LeastFrequent,
            )
        } else {
            self.select(table, table.iter(), RankOrder::LeastFrequent)
        };

        RarityList {
            singletons,
            entries,
        }
    }

    fn select<'a>(
        &self,
        table: &FrequencyTable,
        entries: impl Iterator<Item = (&'a str, u64)>,
        order: RankOrder,
    ) -> Vec<RankedEntry> {
        if self.limit == 0 {
            return Vec::new();
        }

        // Min-heap on rank: the weakest kept candidate sits on top
        let mut heap: BinaryHeap<Reverse<Candidate<'a>>> = BinaryHeap::with_capacity(self.limit);
        for (word, count) in entries {
            let candidate = Candidate { word, count, order };
            if heap.len() < self.limit {
                heap.push(Reverse(candidate));
            } else if let Some(Reverse(weakest)) = heap.peek() {
                if candidate > *weakest {
                    heap.pop();
                    heap.push(Reverse(candidate));
                }
            }
        }

        let total = table.total();
        heap.into_sorted_vec()
            .into_iter()
            .enumerate()
            .map(|(i, Reverse(candidate))| RankedEntry {
                rank: i + 1,
                word: candidate.word.to_string(),
                count: candidate.count,
                percentage: percentage(candidate.count, total),
            })
            .collect()
    }
}

fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Percentage decrease in distinct words after stemming.
///
/// ```
/// use chastota::frequency::vocabulary_reduction;
///
/// assert_eq!(vocabulary_reduction(100, 80), 20.0);
/// ```
pub fn vocabulary_reduction(unique_original: usize, unique_stemmed: usize) -> f64 {
    if unique_original == 0 {
        return 0.0;
    }
    (unique_original as f64 - unique_stemmed as f64) / unique_original as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(entries: &[RankedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.word.as_str()).collect()
    }

    #[test]
    fn test_top_orders_by_count() {
        let table = FrequencyTable::from_counts([("лес", 3), ("дом", 7), ("сад", 1), ("кот", 5)]);

        let top = Ranker::new(3).top(&table);

        assert_eq!(words(&top), vec!["дом", "кот", "лес"]);
        assert_eq!(top[0].rank, 1);
        assert_eq!(top[2].rank, 3);
        assert_eq!(top[0].count, 7);
        assert!((top[0].percentage - 43.75).abs() < 1e-9);
    }

    #[test]
    fn test_top_breaks_ties_alphabetically() {
        let table = FrequencyTable::from_counts([("ель", 2), ("бук", 2), ("дуб", 2), ("ясень", 9)]);

        let top = Ranker::new(3).top(&table);

        assert_eq!(words(&top), vec!["ясень", "бук", "дуб"]);
    }

    #[test]
    fn test_top_length_and_monotonic_counts() {
        let table = FrequencyTable::from_words(
            "а б в г д е ж з и к л м а б в а б а"
                .split(' ')
                .map(|w| format!("{w}{w}{w}")),
        );

        for limit in [1, 3, 12, 50] {
            let top = Ranker::new(limit).top(&table);
            assert_eq!(top.len(), limit.min(table.len()));
            for pair in top.windows(2) {
                assert!(pair[0].count >= pair[1].count);
            }
        }
    }

    #[test]
    fn test_rarest_prefers_singletons() {
        let table = FrequencyTable::from_counts([("c", 2), ("b", 1), ("a", 1)]);

        let rarest = Ranker::new(50).rarest(&table);

        assert_eq!(rarest.singletons, 2);
        assert!(rarest.from_singletons());
        assert_eq!(words(&rarest.entries), vec!["a", "b"]);
    }

    #[test]
    fn test_rarest_singletons_truncated_alphabetically() {
        let table = FrequencyTable::from_counts([("яма", 1), ("арка", 1), ("мост", 1), ("дом", 4)]);

        let rarest = Ranker::new(2).rarest(&table);

        assert_eq!(rarest.singletons, 3);
        assert_eq!(words(&rarest.entries), vec!["арка", "мост"]);
    }

    #[test]
    fn test_rarest_falls_back_to_lowest_counts() {
        let table =
            FrequencyTable::from_counts([("щи", 5), ("каша", 2), ("суп", 3), ("борщ", 2)]);

        let rarest = Ranker::new(3).rarest(&table);

        assert_eq!(rarest.singletons, 0);
        assert!(!rarest.from_singletons());
        assert_eq!(words(&rarest.entries), vec!["борщ", "каша", "суп"]);
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::new();
        let ranker = Ranker::new(50);

        assert!(ranker.top(&table).is_empty());
        let rarest = ranker.rarest(&table);
        assert_eq!(rarest.singletons, 0);
        assert!(rarest.entries.is_empty());
    }

    #[test]
    fn test_zero_limit() {
        let table = FrequencyTable::from_words(["кот"]);
        assert!(Ranker::new(0).top(&table).is_empty());
        assert!(Ranker::new(0).rarest(&table).entries.is_empty());
    }

    #[test]
    fn test_vocabulary_reduction() {
        assert_eq!(vocabulary_reduction(100, 80), 20.0);
        assert_eq!(vocabulary_reduction(50, 50), 0.0);
        assert_eq!(vocabulary_reduction(0, 0), 0.0);
    }
}
