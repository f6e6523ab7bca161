//! Top-K sentence selection
//!
//! Picks the highest-scoring sentences from a [`SentenceScoreTable`]. Ranking
//! is score descending, then first occurrence ascending, so equal scores go to
//! the sentence that appeared earlier. The result is in rank order, not
//! document order.

use super::scores::SentenceScoreTable;
use crate::types::ScoredSentence;
use std::cmp::Ordering;

/// Configuration for sentence selection
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Number of sentences to select
    pub num_sentences: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self { num_sentences: 3 }
    }
}

/// Top-K sentence selector
#[derive(Debug)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self {
            config: SelectorConfig::default(),
        }
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Set number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.config.num_sentences = n;
        self
    }

    /// Select the top sentences, highest score first
    ///
    /// Asking for more sentences than the table holds returns all of them.
    pub fn select(&self, table: &SentenceScoreTable) -> Vec<ScoredSentence> {
        let k = self.config.num_sentences.min(table.len());
        if k == 0 {
            return Vec::new();
        }

        let mut ranked: Vec<&ScoredSentence> = table.iter().collect();

        // Partial selection first; only the kept prefix needs a full sort
        if k < ranked.len() {
            ranked.select_nth_unstable_by(k - 1, |a, b| rank_order(a, b));
            ranked.truncate(k);
        }
        ranked.sort_by(|a, b| rank_order(a, b));

        ranked.into_iter().cloned().collect()
    }
}

/// Score descending, then first occurrence ascending
///
/// `first_index` is unique per table entry, so this is a total order.
pub fn rank_order(a: &ScoredSentence, b: &ScoredSentence) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.first_index.cmp(&b.first_index))
}
