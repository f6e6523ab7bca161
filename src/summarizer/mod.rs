//! Summarization components
//!
//! Provides word-frequency extractive summarization: a frequency table over
//! the document, per-sentence scores, and top-K selection.

pub mod batch;
pub mod engine;
pub mod frequency;
pub mod scores;
pub mod selector;
pub mod shared;
