//! Natural Language Processing components
//!
//! This module provides sentence/word segmentation and stopword filtering.

pub mod stopwords;
pub mod tokenizer;
