//! Rule-based Russian suffix stemmer.
//!
//! A heuristic suffix stripper, not a morphological analyser: it removes
//! the longest known inflectional ending that still leaves a stem of at
//! least three characters.

use super::Stemmer;

/// Inflectional endings: verb, adjective, case and reflexive/participial.
const RUSSIAN_ENDINGS: &[&str] = &[
    "ость", "ать", "ять", "ить", "еть", "уть", "ють", "ат", "ят", "ит", "ет", "ут", "ют", "ый",
    "ий", "ая", "яя", "ое", "ее", "ые", "ие", "ов", "ев", "ам", "ям", "ами", "ями", "ах", "ях",
    "ом", "ем", "у", "ю", "ем", "им", "шь", "ть", "ти", "л", "ла", "ло", "ли", "н", "на", "но",
    "ны", "ть", "ся", "ей", "ой",
];

/// Shortest stem a rule may leave behind, in characters.
pub const DEFAULT_MIN_STEM_CHARS: usize = 3;

/// One entry of the stemming rule table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuffixRule {
    /// Ending to strip.
    pub suffix: String,
    /// The rule only fires when at least this many characters remain.
    pub min_stem_chars: usize,
}

impl SuffixRule {
    /// Create a rule with the default minimum stem length.
    pub fn new<S: Into<String>>(suffix: S) -> Self {
        SuffixRule {
            suffix: suffix.into(),
            min_stem_chars: DEFAULT_MIN_STEM_CHARS,
        }
    }

    /// Override the minimum stem length.
    pub fn with_min_stem_chars(mut self, min_stem_chars: usize) -> Self {
        self.min_stem_chars = min_stem_chars;
        self
    }

    /// Length of the suffix in characters.
    pub fn suffix_chars(&self) -> usize {
        self.suffix.chars().count()
    }

    /// Return the stem if this rule applies to `word`.
    pub fn apply<'a>(&self, word: &'a str) -> Option<&'a str> {
        if !word.ends_with(self.suffix.as_str()) {
            return None;
        }
        let stem_chars = word.chars().count() - self.suffix_chars();
        if stem_chars < self.min_stem_chars {
            return None;
        }
        Some(&word[..word.len() - self.suffix.len()])
    }
}

/// Longest-suffix-first Russian stemmer.
///
/// Rules are kept sorted by suffix length, longest first, so that e.g.
/// `ать` is always tried before `ть`. Suffixes of equal length keep the
/// order in which they were supplied.
#[derive(Clone, Debug)]
pub struct RussianSuffixStemmer {
    rules: Vec<SuffixRule>,
}

impl RussianSuffixStemmer {
    /// Create a stemmer with the built-in rule table.
    pub fn new() -> Self {
        Self::with_rules(RUSSIAN_ENDINGS.iter().map(|&s| SuffixRule::new(s)).collect())
    }

    /// Create a stemmer with a custom rule table.
    ///
    /// Duplicate suffixes are dropped (the first occurrence wins) and the
    /// remaining rules are ordered longest suffix first.
    pub fn with_rules(rules: Vec<SuffixRule>) -> Self {
        let mut unique: Vec<SuffixRule> = Vec::with_capacity(rules.len());
        for rule in rules {
            if !unique.iter().any(|r| r.suffix == rule.suffix) {
                unique.push(rule);
            }
        }
        unique.sort_by_key(|rule| std::cmp::Reverse(rule.suffix_chars()));

        RussianSuffixStemmer { rules: unique }
    }

    /// The rule table in evaluation order.
    pub fn rules(&self) -> &[SuffixRule] {
        &self.rules
    }
}

impl Default for RussianSuffixStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for RussianSuffixStemmer {
    fn stem(&self, word: &str) -> String {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(word))
            .unwrap_or(word)
            .to_string()
    }

    fn name(&self) -> &'static str {
        "russian_suffix"
    }
}
