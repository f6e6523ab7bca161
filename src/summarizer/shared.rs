//! Process-wide summarizer
//!
//! Tokenizer and stopword data are loaded once per process. [`init`] is the
//! startup step: the first successful call builds the shared [`Summarizer`],
//! later calls return it unchanged and ignore their config. A failed load
//! leaves the cell empty and hands the error back; nothing is retried.

use super::engine::Summarizer;
use crate::errors::Result;
use crate::types::SummarizerConfig;
use once_cell::sync::OnceCell;

static SHARED: OnceCell<Summarizer> = OnceCell::new();

/// Build the shared summarizer from `config`, or return the existing one
pub fn init(config: &SummarizerConfig) -> Result<&'static Summarizer> {
    SHARED.get_or_try_init(|| {
        info_event!(
            stopwords = config.stopwords.as_str(),
            extra = config.extra_stopwords.len(),
            "loading summarizer resources"
        );
        Summarizer::from_config(config)
    })
}

/// [`init`] with the default configuration
pub fn init_default() -> Result<&'static Summarizer> {
    match SHARED.get() {
        Some(summarizer) => Ok(summarizer),
        None => init(&SummarizerConfig::default()),
    }
}

/// The shared summarizer, if [`init`] has succeeded
pub fn get() -> Option<&'static Summarizer> {
    SHARED.get()
}

pub fn is_initialized() -> bool {
    SHARED.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let first = init_default().unwrap();
        let second = init(&SummarizerConfig::default()).unwrap();

        assert!(std::ptr::eq(first, second));
        assert!(is_initialized());
        assert!(get().is_some());
    }

    #[test]
    fn test_later_config_is_ignored() {
        let first = init_default().unwrap();
        let other = SummarizerConfig::new().with_extra_stopwords(["cats"]);
        let second = init(&other).unwrap();

        assert!(std::ptr::eq(first, second));
        assert!(!second.stopwords().is_stopword("cats"));
    }
}
