//! Word frequency table
//!
//! Counts every word of the document that is alphanumeric and not a
//! stopword. Words keep their first-appearance order so keyword listings are
//! deterministic.

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::is_word;
use rustc_hash::FxHashMap;

/// Occurrence counts of the document's content words
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// Maps word -> slot in `entries`
    word_to_slot: FxHashMap<String, usize>,
    /// (word, count) in first-appearance order
    entries: Vec<(String, u64)>,
    /// Sum of all counts
    total: u64,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count `words`, skipping non-words and stopwords
    ///
    /// Words are expected to be lowercased already.
    pub fn from_words<'a, I>(words: I, stopwords: &StopwordFilter) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = Self::new();
        for word in words {
            if is_word(word) && !stopwords.is_stopword(word) {
                table.increment(word);
            }
        }
        table
    }

    /// Add one occurrence of `word`
    pub fn increment(&mut self, word: &str) {
        self.total += 1;
        if let Some(&slot) = self.word_to_slot.get(word) {
            self.entries[slot].1 += 1;
            return;
        }

        let slot = self.entries.len();
        self.word_to_slot.insert(word.to_string(), slot);
        self.entries.push((word.to_string(), 1));
    }

    /// Count for `word`, `None` when it never appeared (or was filtered)
    pub fn get(&self, word: &str) -> Option<u64> {
        self.word_to_slot.get(word).map(|&slot| self.entries[slot].1)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.word_to_slot.contains_key(word)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of counted occurrences
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Iterate (word, count) in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// The `n` most frequent words; equal counts keep first-appearance order
    pub fn most_common(&self, n: usize) -> Vec<(String, u64)> {
        let mut ranked: Vec<&(String, u64)> = self.entries.iter().collect();
        // Stable sort keeps first-appearance order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().take(n).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lowered(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_lowercase).collect()
    }

    #[test]
    fn test_counts_content_words() {
        let words = lowered("cats are great dogs are great cats and dogs are both pets");
        let table =
            FrequencyTable::from_words(words.iter().map(String::as_str), &StopwordFilter::classic());

        assert_eq!(table.get("cats"), Some(2));
        assert_eq!(table.get("dogs"), Some(2));
        assert_eq!(table.get("great"), Some(2));
        assert_eq!(table.get("pets"), Some(1));
        assert_eq!(table.get("are"), None);
        assert_eq!(table.get("both"), None);
        assert_eq!(table.len(), 4);
        assert_eq!(table.total(), 7);
    }

    #[test]
    fn test_skips_punctuation() {
        let table = FrequencyTable::from_words(
            ["hello", ",", "world", "!", "hello", "don't"],
            &StopwordFilter::empty(),
        );

        assert_eq!(table.get("hello"), Some(2));
        assert_eq!(table.get(","), None);
        assert!(!table.contains("don't"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_most_common_ties_keep_first_appearance() {
        let table = FrequencyTable::from_words(
            ["beta", "alpha", "gamma", "alpha", "beta", "delta"],
            &StopwordFilter::empty(),
        );

        let top = table.most_common(3);
        assert_eq!(
            top,
            vec![
                ("beta".to_string(), 2),
                ("alpha".to_string(), 2),
                ("gamma".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_iter_in_first_appearance_order() {
        let table = FrequencyTable::from_words(["b", "a", "b"], &StopwordFilter::empty());
        let words: Vec<_> = table.iter().collect();
        assert_eq!(words, vec![("b", 2), ("a", 1)]);
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::from_words(["the", "a", "."], &StopwordFilter::classic());
        assert!(table.is_empty());
        assert_eq!(table.most_common(5), Vec::new());
    }
}
