//! Frequency-based extractive summarizer
//!
//! The algorithm runs in four stages:
//! 1. Segment the document into sentences
//! 2. Count content words over the lowercased document (alphanumeric, not a
//!    stopword) into a [`FrequencyTable`]
//! 3. Score each sentence by summing the table count of every token in the
//!    lowercased sentence. Tokens are not stopword-filtered here; stopwords
//!    contribute nothing because the table never holds them.
//! 4. Take the top sentences by score, earlier sentences winning ties, and
//!    join them in rank order

use super::frequency::FrequencyTable;
use super::scores::SentenceScoreTable;
use super::selector::SentenceSelector;
use crate::errors::{Result, SummarizeError};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::{ScoredSentence, Sentence, SummarizerConfig};
use serde::Serialize;

/// Keywords reported by [`Summarizer::summarize_detailed`]
pub const DEFAULT_KEYWORDS: usize = 5;

/// Intermediate results of scoring one document
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Sentences in segmentation order, duplicates included
    pub sentences: Vec<Sentence>,
    /// Content-word counts over the whole document
    pub frequencies: FrequencyTable,
    /// Scores keyed by sentence text, in first-occurrence order
    pub scores: SentenceScoreTable,
}

/// A summary together with the data the shell displays next to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Selected sentences joined by the separator
    pub text: String,
    /// Selected sentences in rank order
    pub sentences: Vec<ScoredSentence>,
    /// Most frequent content words
    pub keywords: Vec<(String, u64)>,
    /// Number of distinct sentences in the document
    pub distinct_sentences: usize,
    /// Character count of the input
    pub original_chars: usize,
    /// Character count of `text`
    pub summary_chars: usize,
}

/// Extractive summarizer over a fixed tokenizer and stopword set
///
/// Immutable once built; share it freely between threads.
#[derive(Debug, Clone)]
pub struct Summarizer {
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
    include_unscored: bool,
    separator: String,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(Tokenizer::default(), StopwordFilter::default())
    }
}

impl Summarizer {
    /// Create a summarizer from its collaborators
    pub fn new(tokenizer: Tokenizer, stopwords: StopwordFilter) -> Self {
        Self {
            tokenizer,
            stopwords,
            include_unscored: true,
            separator: " ".to_string(),
        }
    }

    /// Load resources described by `config`
    ///
    /// Fails with [`SummarizeError::InvalidConfig`] for bad values and
    /// [`SummarizeError::ResourceInit`] when the stopword set cannot be loaded.
    pub fn from_config(config: &SummarizerConfig) -> Result<Self> {
        config.validate()?;

        let mut stopwords = StopwordFilter::load(&config.stopwords)?;
        stopwords.add_stopwords(config.extra_stopwords.as_slice());
        let tokenizer = Tokenizer::with_abbreviations(config.abbreviations.as_slice());

        Ok(Self {
            tokenizer,
            stopwords,
            include_unscored: config.include_unscored,
            separator: config.separator.clone(),
        })
    }

    /// Keep or drop sentences that contain no frequency-table word
    pub fn with_include_unscored(mut self, include: bool) -> Self {
        self.include_unscored = include;
        self
    }

    /// Set the string placed between selected sentences
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Summarize `text` into at most `num_sentences` sentences
    pub fn summarize(&self, text: &str, num_sentences: usize) -> Result<String> {
        self.summarize_detailed(text, num_sentences)
            .map(|summary| summary.text)
    }

    /// Summarize and report scores, keywords and character counts
    pub fn summarize_detailed(&self, text: &str, num_sentences: usize) -> Result<Summary> {
        if num_sentences == 0 {
            return Err(SummarizeError::invalid_input(
                "num_sentences must be at least 1",
            ));
        }

        let analysis = self.analyze(text)?;
        let selected = {
            trace_stage!("select");
            SentenceSelector::new()
                .with_num_sentences(num_sentences)
                .select(&analysis.scores)
        };

        let joined = selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(&self.separator);

        debug_event!(
            sentences = analysis.sentences.len(),
            distinct = analysis.scores.len(),
            selected = selected.len(),
            "summary built"
        );

        Ok(Summary {
            original_chars: text.chars().count(),
            summary_chars: joined.chars().count(),
            keywords: analysis.frequencies.most_common(DEFAULT_KEYWORDS),
            distinct_sentences: analysis.scores.len(),
            sentences: selected,
            text: joined,
        })
    }

    /// Segment, count and score `text` without selecting
    pub fn analyze(&self, text: &str) -> Result<Analysis> {
        if text.trim().is_empty() {
            return Err(SummarizeError::invalid_input("text is empty"));
        }

        let sentences = self.segment(text);
        if sentences.is_empty() {
            return Err(SummarizeError::invalid_input("no sentences found in text"));
        }

        let frequencies = self.count_words(text);
        let scores = self.score_sentences(&sentences, &frequencies);
        if scores.is_empty() {
            return Err(SummarizeError::invalid_input(
                "no sentence contains a scorable word",
            ));
        }

        Ok(Analysis {
            sentences,
            frequencies,
            scores,
        })
    }

    fn segment(&self, text: &str) -> Vec<Sentence> {
        trace_stage!("segment");
        self.tokenizer.segment_sentences(text)
    }

    fn count_words(&self, text: &str) -> FrequencyTable {
        trace_stage!("frequency");
        let lowered = text.to_lowercase();
        FrequencyTable::from_words(self.tokenizer.segment_words(&lowered), &self.stopwords)
    }

    fn score_sentences(
        &self,
        sentences: &[Sentence],
        frequencies: &FrequencyTable,
    ) -> SentenceScoreTable {
        trace_stage!("score");
        let mut scores = SentenceScoreTable::with_capacity(sentences.len());

        for sentence in sentences {
            if self.include_unscored {
                scores.entry(sentence);
            }

            let lowered = sentence.text.to_lowercase();
            for word in self.tokenizer.segment_words(&lowered) {
                if let Some(count) = frequencies.get(word) {
                    scores.add(sentence, count);
                }
            }
        }

        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PETS: &str = "Cats are great. Dogs are great too. Cats and dogs are both pets.";

    #[test]
    fn test_single_best_sentence() {
        let summarizer = Summarizer::default();
        let summary = summarizer.summarize_detailed(PETS, 1).unwrap();

        assert_eq!(summary.text, "Cats and dogs are both pets.");
        assert_eq!(summary.sentences.len(), 1);
        assert_eq!(summary.sentences[0].score, 5);
    }

    #[test]
    fn test_scores_per_sentence() {
        let summarizer = Summarizer::default();
        let analysis = summarizer.analyze(PETS).unwrap();

        assert_eq!(analysis.scores.score("Cats are great."), Some(4));
        assert_eq!(analysis.scores.score("Dogs are great too."), Some(4));
        assert_eq!(analysis.scores.score("Cats and dogs are both pets."), Some(5));
    }

    #[test]
    fn test_ties_go_to_earlier_sentence() {
        let summarizer = Summarizer::default();
        let summary = summarizer.summarize(PETS, 2).unwrap();

        assert_eq!(summary, "Cats and dogs are both pets. Cats are great.");
    }

    #[test]
    fn test_output_is_rank_order_not_document_order() {
        let summarizer = Summarizer::default();
        let summary = summarizer.summarize(PETS, 3).unwrap();

        assert_eq!(
            summary,
            "Cats and dogs are both pets. Cats are great. Dogs are great too."
        );
    }

    #[test]
    fn test_request_beyond_sentence_count() {
        let summarizer = Summarizer::default();
        let summary = summarizer.summarize_detailed(PETS, 10).unwrap();

        assert_eq!(summary.sentences.len(), 3);
        assert_eq!(summary.distinct_sentences, 3);
    }

    #[test]
    fn test_case_is_ignored_for_counting() {
        let summarizer = Summarizer::default();
        let analysis = summarizer.analyze("RUST is fast. Rust is safe. rust!").unwrap();

        assert_eq!(analysis.frequencies.get("rust"), Some(3));
        assert_eq!(analysis.scores.score("RUST is fast."), Some(4));
    }

    #[test]
    fn test_repeated_sentence_accumulates() {
        let summarizer = Summarizer::default();
        let text = "Rust is fast. Go is simple. Rust is fast.";
        let analysis = summarizer.analyze(text).unwrap();

        // "rust" 2 + "fast" 2, counted once per occurrence
        assert_eq!(analysis.scores.score("Rust is fast."), Some(8));
        assert_eq!(analysis.scores.len(), 2);
        assert_eq!(analysis.sentences.len(), 3);

        let summary = summarizer.summarize(text, 5).unwrap();
        assert_eq!(summary, "Rust is fast. Go is simple.");
    }

    #[test]
    fn test_unscored_sentences_are_kept_by_default() {
        let summarizer = Summarizer::default();
        let text = "It is what it is. Compilers check types.";
        let analysis = summarizer.analyze(text).unwrap();

        assert_eq!(analysis.scores.score("It is what it is."), Some(0));

        let summary = summarizer.summarize(text, 2).unwrap();
        assert_eq!(summary, "Compilers check types. It is what it is.");
    }

    #[test]
    fn test_unscored_sentences_dropped_when_disabled() {
        let summarizer = Summarizer::default().with_include_unscored(false);
        let text = "It is what it is. Compilers check types.";

        let summary = summarizer.summarize_detailed(text, 2).unwrap();
        assert_eq!(summary.text, "Compilers check types.");
        assert_eq!(summary.distinct_sentences, 1);
    }

    #[test]
    fn test_only_stopwords_fails_when_unscored_dropped() {
        let summarizer = Summarizer::default().with_include_unscored(false);
        let err = summarizer.summarize("It is what it is.", 1).unwrap_err();
        assert!(matches!(err, SummarizeError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_text_is_invalid_input() {
        let summarizer = Summarizer::default();
        for text in ["", "   ", "\n\t"] {
            let err = summarizer.summarize(text, 3).unwrap_err();
            assert!(matches!(err, SummarizeError::InvalidInput(_)));
        }
    }

    #[test]
    fn test_zero_sentences_is_invalid_input() {
        let summarizer = Summarizer::default();
        let err = summarizer.summarize(PETS, 0).unwrap_err();
        assert!(matches!(err, SummarizeError::InvalidInput(_)));
    }

    #[test]
    fn test_character_counts() {
        let summarizer = Summarizer::default();
        let text = "Café culture thrives. Naïve readers enjoy café visits.";
        let summary = summarizer.summarize_detailed(text, 1).unwrap();

        assert_eq!(summary.original_chars, text.chars().count());
        assert_eq!(summary.summary_chars, summary.text.chars().count());
        assert!(summary.original_chars < text.len());
    }

    #[test]
    fn test_keywords() {
        let summarizer = Summarizer::default();
        let summary = summarizer.summarize_detailed(PETS, 1).unwrap();

        assert_eq!(
            summary.keywords,
            vec![
                ("cats".to_string(), 2),
                ("great".to_string(), 2),
                ("dogs".to_string(), 2),
                ("pets".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_custom_separator() {
        let summarizer = Summarizer::default().with_separator("\n");
        let summary = summarizer.summarize(PETS, 2).unwrap();
        assert_eq!(summary, "Cats and dogs are both pets.\nCats are great.");
    }

    #[test]
    fn test_from_config_applies_extra_stopwords() {
        let config = SummarizerConfig::new().with_extra_stopwords(["cats"]);
        let summarizer = Summarizer::from_config(&config).unwrap();
        let analysis = summarizer.analyze(PETS).unwrap();

        assert_eq!(analysis.frequencies.get("cats"), None);
        assert_eq!(analysis.scores.score("Dogs are great too."), Some(4));
        assert_eq!(analysis.scores.score("Cats are great."), Some(2));
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let config = SummarizerConfig::new().with_separator("");
        let err = Summarizer::from_config(&config).unwrap_err();
        assert!(matches!(err, SummarizeError::InvalidConfig(_)));
    }

    #[test]
    fn test_is_deterministic() {
        let summarizer = Summarizer::default();
        let text = "Alpha beta. Beta gamma. Gamma alpha. Delta epsilon. Alpha delta.";
        let first = summarizer.summarize(text, 3).unwrap();
        let second = summarizer.summarize(text, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_possessive_counts_its_stem() {
        let summarizer = Summarizer::default();
        let text = "Rust's compiler is strict. Rust is loved. Python is easy.";
        let analysis = summarizer.analyze(text).unwrap();

        assert_eq!(analysis.frequencies.get("rust"), Some(2));
        assert_eq!(analysis.scores.score("Rust's compiler is strict."), Some(4));
        assert_eq!(analysis.scores.score("Rust is loved."), Some(3));
        assert_eq!(analysis.scores.score("Python is easy."), Some(2));
    }

    #[test]
    fn test_sentence_ending_in_no_stays_separate() {
        let summarizer = Summarizer::default();
        let analysis = summarizer
            .analyze("The answer is no. We left early. Nobody stayed.")
            .unwrap();
        assert_eq!(analysis.sentences.len(), 3);
    }
}
