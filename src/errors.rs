//! Error types for freqsum

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Errors produced while loading resources or summarizing text
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The caller handed us something we cannot summarize
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Tokenizer or stopword data could not be loaded
    #[error("failed to initialize resources: {0}")]
    ResourceInit(String),

    /// Configuration values are out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration file is not valid JSON for [`SummarizerConfig`](crate::SummarizerConfig)
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Reading input or a configuration file failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SummarizeError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn resource_init(msg: impl Into<String>) -> Self {
        Self::ResourceInit(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Whether the error should be shown to the user as a prompt rather than
    /// treated as a failure of the process.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
