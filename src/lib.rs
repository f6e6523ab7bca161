//! # freqsum
//!
//! Word-frequency extractive summarization.
//!
//! Given a document and a sentence count N, freqsum counts every content word
//! in the document, scores each sentence by the counts of the words it
//! contains, and returns the N highest-scoring sentences verbatim, highest
//! score first.
//!
//! ```
//! let text = "Cats are great. Dogs are great too. Cats and dogs are both pets.";
//! let summary = freqsum::summarize(text, 1)?;
//! assert_eq!(summary, "Cats and dogs are both pets.");
//! # Ok::<(), freqsum::SummarizeError>(())
//! ```
//!
//! ## Features
//!
//! - **`tracing`** (default): spans around each summarization stage
//! - **`cli`** (default): the `freqsum` command-line binary

/// Enter a tracing span for a summarization stage (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("summarize_stage", stage = $name).entered();
    };
}

macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

macro_rules! info_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::info!($($arg)*);
    };
}

pub mod errors;
pub mod nlp;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SummarizeError};
pub use types::{ScoredSentence, Sentence, StopwordSource, SummarizerConfig};

// Re-export main functionality
pub use nlp::{stopwords::StopwordFilter, tokenizer::Tokenizer};
pub use summarizer::batch::summarize_batch;
pub use summarizer::engine::{Analysis, Summarizer, Summary};
pub use summarizer::frequency::FrequencyTable;
pub use summarizer::scores::SentenceScoreTable;
pub use summarizer::selector::SentenceSelector;
pub use summarizer::shared::{init, init_default};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summarize `text` with the process-wide summarizer
///
/// Loads the default resources on first use when [`init`] has not run.
pub fn summarize(text: &str, num_sentences: usize) -> Result<String> {
    init_default()?.summarize(text, num_sentences)
}
