//! Word frequency counting
//!
//! Tokens are split on word separators, stripped of leading and trailing ASCII
//! punctuation and lowercased before counting. Tokens that are nothing but
//! punctuation are dropped.

use std::collections::HashMap;

use log::{debug, warn};
use serde::Serialize;

use crate::utils::text_utils::{split_lines, split_words};

/// Characters stripped from both ends of a token
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A word and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Normalize a raw token, returning `None` when nothing is left
pub fn normalize_word(token: &str) -> Option<String> {
    let normalized = token
        .trim_matches(|c: char| PUNCTUATION.contains(c))
        .to_lowercase();

    if normalized.trim().is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Normalized words of a single line, in order
pub fn tokenize(line: &str) -> Vec<String> {
    split_words(line).filter_map(normalize_word).collect()
}

/// Frequency table over normalized words
///
/// Besides the counts the counter remembers the order in which words were
/// first seen, which is the tie-break for [`WordFrequencyCounter::top_n`].
#[derive(Debug, Default)]
pub struct WordFrequencyCounter {
    counts: HashMap<String, usize>,
    first_seen: Vec<String>,
}

impl WordFrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the words of `text`, discarding anything counted before
    pub fn ingest(&mut self, text: &str) {
        self.counts.clear();
        self.first_seen.clear();

        if text.trim().is_empty() {
            warn!("The text is empty, no words to count");
            return;
        }

        for line in split_lines(text) {
            for word in tokenize(line) {
                match self.counts.get_mut(&word) {
                    Some(count) => *count += 1,
                    None => {
                        self.first_seen.push(word.clone());
                        self.counts.insert(word, 1);
                    }
                }
            }
        }

        debug!(
            "Counted {} words, {} distinct",
            self.total_words(),
            self.distinct_words()
        );
    }

    pub fn frequencies(&self) -> &HashMap<String, usize> {
        &self.counts
    }

    /// Occurrences of `word` after normalization, 0 when absent
    pub fn count_of(&self, word: &str) -> usize {
        normalize_word(word)
            .and_then(|w| self.counts.get(&w).copied())
            .unwrap_or(0)
    }

    /// The `n` most frequent words, descending by count.
    ///
    /// Words with equal counts keep the order in which they first appeared.
    pub fn top_n(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked: Vec<(String, usize)> = self
            .first_seen
            .iter()
            .map(|word| (word.clone(), self.counts[word]))
            .collect();

        // sort_by is stable, so first-seen order survives among ties
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Number of words that occur exactly once
    pub fn unique_word_count(&self) -> usize {
        self.counts.values().filter(|&&count| count == 1).count()
    }

    /// Sum of all counts
    pub fn total_words(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct normalized words
    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter_for(text: &str) -> WordFrequencyCounter {
        let mut counter = WordFrequencyCounter::new();
        counter.ingest(text);
        counter
    }

    #[test]
    fn test_case_insensitive_counting() {
        let counter = counter_for("test Test TEST different different");

        let expected: HashMap<String, usize> =
            [("test".to_string(), 3), ("different".to_string(), 2)].into_iter().collect();
        assert_eq!(counter.frequencies(), &expected);
        assert_eq!(counter.unique_word_count(), 0);
        assert_eq!(counter.total_words(), 5);
        assert_eq!(counter.distinct_words(), 2);
    }

    #[test]
    fn test_punctuation_only_tokens_are_dropped() {
        let counter = counter_for("Hello! @#$% World?");

        let expected: HashMap<String, usize> =
            [("hello".to_string(), 1), ("world".to_string(), 1)].into_iter().collect();
        assert_eq!(counter.frequencies(), &expected);
        assert_eq!(counter.unique_word_count(), 2);
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("`Quoted`"), Some("quoted".to_string()));
        assert_eq!(normalize_word("(brackets)."), Some("brackets".to_string()));
        assert_eq!(normalize_word("don't"), Some("don't".to_string()));
        assert_eq!(normalize_word("--"), None);
        assert_eq!(normalize_word("..."), None);
    }

    #[test]
    fn test_inner_punctuation_is_kept() {
        let counter = counter_for("e-mail e-mail, mail");
        assert_eq!(counter.count_of("e-mail"), 2);
        assert_eq!(counter.count_of("mail"), 1);
        assert_eq!(counter.count_of("absent"), 0);
    }

    #[test]
    fn test_unit_separator_splits_words() {
        let counter = counter_for("Alpha\u{1f}beta\r\nalpha");
        assert_eq!(counter.count_of("alpha"), 2);
        assert_eq!(counter.count_of("beta"), 1);
    }

    #[test]
    fn test_empty_and_whitespace_text() {
        assert!(counter_for("").frequencies().is_empty());
        assert!(counter_for("  \n\t \n").frequencies().is_empty());
        assert!(counter_for("").top_n(10).is_empty());
    }

    #[test]
    fn test_top_n_orders_by_count() {
        let counter = counter_for("b a b c b a");
        assert_eq!(
            counter.top_n(10),
            vec![("b".to_string(), 3), ("a".to_string(), 2), ("c".to_string(), 1)]
        );
        assert_eq!(counter.top_n(1), vec![("b".to_string(), 3)]);
        assert!(counter.top_n(0).is_empty());
    }

    #[test]
    fn test_top_n_ties_keep_first_occurrence_order() {
        let counter = counter_for("zeta alpha\nmid zeta alpha mid omega");
        assert_eq!(
            counter.top_n(4),
            vec![
                ("zeta".to_string(), 2),
                ("alpha".to_string(), 2),
                ("mid".to_string(), 2),
                ("omega".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_ingest_twice_does_not_double_count() {
        let mut counter = WordFrequencyCounter::new();
        counter.ingest("one two two");
        let first = counter.top_n(10);
        counter.ingest("one two two");
        assert_eq!(counter.top_n(10), first);
        assert_eq!(counter.total_words(), 3);
    }

    #[test]
    fn test_ingest_replaces_previous_text() {
        let mut counter = WordFrequencyCounter::new();
        counter.ingest("old words here");
        counter.ingest("new");
        assert_eq!(counter.distinct_words(), 1);
        assert_eq!(counter.count_of("old"), 0);
    }
}
