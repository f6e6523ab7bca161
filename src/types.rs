//! Core types for freqsum
//!
//! Sentences as produced by segmentation, scored sentences as produced by
//! selection, and the summarizer configuration.

use crate::errors::{Result, SummarizeError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text, trimmed of surrounding whitespace
    pub text: String,
    /// Start byte offset in original text
    pub start: usize,
    /// End byte offset in original text (exclusive)
    pub end: usize,
    /// Sentence index within the document
    pub index: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }
}

/// A distinct sentence together with its accumulated frequency score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredSentence {
    /// Sentence text, the key under which scores accumulate
    pub text: String,
    /// Sum of frequency-table counts over the sentence's words
    pub score: u64,
    /// Segmentation index of the first occurrence
    pub first_index: usize,
}

// ============================================================================
// Stopword source
// ============================================================================

/// Where the stopword set comes from
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopwordSource {
    /// The classic 179-word English list
    #[default]
    Classic,
    /// The English list shipped with the `stop-words` crate
    Extended,
    /// No stopwords at all
    None,
    /// One word per line, `#` starts a comment
    File(PathBuf),
}

impl StopwordSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Extended => "extended",
            Self::None => "none",
            Self::File(_) => "file",
        }
    }
}

impl std::str::FromStr for StopwordSource {
    type Err = SummarizeError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "classic" | "nltk" => Ok(Self::Classic),
            "extended" | "full" => Ok(Self::Extended),
            "none" | "empty" => Ok(Self::None),
            _ => {
                // Paths keep their original case
                let path = value
                    .get(..5)
                    .filter(|prefix| prefix.eq_ignore_ascii_case("file:"))
                    .map(|_| &value[5..]);
                match path {
                    Some(path) if !path.is_empty() => Ok(Self::File(PathBuf::from(path))),
                    _ => Err(SummarizeError::invalid_config(format!(
                        "unknown stopword source '{value}'"
                    ))),
                }
            }
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

fn default_num_sentences() -> usize {
    3
}

fn default_max_sentences() -> usize {
    10
}

fn default_abbreviations() -> Vec<String> {
    crate::nlp::tokenizer::DEFAULT_ABBREVIATIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_include_unscored() -> bool {
    true
}

fn default_separator() -> String {
    " ".to_string()
}

/// Configuration for the summarizer and its shared resources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Number of sentences used when the caller does not ask for one
    #[serde(default = "default_num_sentences")]
    pub num_sentences: usize,
    /// Upper bound shells clamp requests to
    #[serde(default = "default_max_sentences")]
    pub max_sentences: usize,
    /// Stopword set to load
    #[serde(default)]
    pub stopwords: StopwordSource,
    /// Additional stopwords appended to the chosen set
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
    /// Words that end in a period without ending the sentence
    #[serde(default = "default_abbreviations")]
    pub abbreviations: Vec<String>,
    /// Keep sentences that contain no frequency-table word (score 0)
    #[serde(default = "default_include_unscored")]
    pub include_unscored: bool,
    /// Joiner placed between selected sentences
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            num_sentences: default_num_sentences(),
            max_sentences: default_max_sentences(),
            stopwords: StopwordSource::default(),
            extra_stopwords: Vec::new(),
            abbreviations: default_abbreviations(),
            include_unscored: default_include_unscored(),
            separator: default_separator(),
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from a JSON string and validate it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file and validate it
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.num_sentences == 0 {
            return Err(SummarizeError::invalid_config("num_sentences must be > 0"));
        }

        if self.max_sentences == 0 {
            return Err(SummarizeError::invalid_config("max_sentences must be > 0"));
        }

        if self.num_sentences > self.max_sentences {
            return Err(SummarizeError::invalid_config(format!(
                "num_sentences ({}) must be <= max_sentences ({})",
                self.num_sentences, self.max_sentences
            )));
        }

        if self.separator.is_empty() {
            return Err(SummarizeError::invalid_config("separator must not be empty"));
        }

        Ok(())
    }

    /// Clamp a requested sentence count to `[1, max_sentences]`
    pub fn clamp_sentences(&self, requested: usize) -> usize {
        requested.clamp(1, self.max_sentences.max(1))
    }

    /// Builder method: set the default number of sentences
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.num_sentences = n;
        self
    }

    /// Builder method: set the shell clamp upper bound
    pub fn with_max_sentences(mut self, n: usize) -> Self {
        self.max_sentences = n;
        self
    }

    /// Builder method: set the stopword source
    pub fn with_stopwords(mut self, source: StopwordSource) -> Self {
        self.stopwords = source;
        self
    }

    /// Builder method: add stopwords on top of the source
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder method: replace the abbreviation list
    pub fn with_abbreviations<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.abbreviations = words.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: keep or drop zero-score sentences
    pub fn with_include_unscored(mut self, include: bool) -> Self {
        self.include_unscored = include;
        self
    }

    /// Builder method: set the output separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}
