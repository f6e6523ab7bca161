//! Sentence score table
//!
//! An insertion-ordered map from sentence text to accumulated score. Entries
//! live in a `Vec` in first-occurrence order and a hash index maps text back
//! to its slot, so iteration order is exactly the order sentences were first
//! seen. Selection relies on that order to break ties.

use crate::types::{ScoredSentence, Sentence};
use rustc_hash::FxHashMap;

/// Accumulated scores keyed by sentence text
#[derive(Debug, Clone, Default)]
pub struct SentenceScoreTable {
    /// Maps sentence text -> slot in `entries`
    text_to_slot: FxHashMap<String, usize>,
    /// Scored sentences in first-occurrence order
    entries: Vec<ScoredSentence>,
}

impl SentenceScoreTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text_to_slot: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Get the entry for `sentence`, inserting it with score 0 on first sight
    pub fn entry(&mut self, sentence: &Sentence) -> &mut ScoredSentence {
        let slot = match self.text_to_slot.get(sentence.text.as_str()) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.text_to_slot.insert(sentence.text.clone(), slot);
                self.entries.push(ScoredSentence {
                    text: sentence.text.clone(),
                    score: 0,
                    first_index: sentence.index,
                });
                slot
            }
        };
        &mut self.entries[slot]
    }

    /// Add `delta` to the score of `sentence`
    pub fn add(&mut self, sentence: &Sentence, delta: u64) {
        self.entry(sentence).score += delta;
    }

    /// Score of the sentence with this exact text
    pub fn score(&self, text: &str) -> Option<u64> {
        self.text_to_slot.get(text).map(|&slot| self.entries[slot].score)
    }

    /// Iterate entries in first-occurrence order
    pub fn iter(&self) -> std::slice::Iter<'_, ScoredSentence> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[ScoredSentence] {
        &self.entries
    }

    /// Number of distinct sentences
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
