//! Error types for moodlens

/// Result type alias using moodlens' Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for moodlens operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Corpus loading / schema errors (fatal during training)
    #[error("corpus error: {0}")]
    Corpus(String),

    /// Vocabulary construction errors
    #[error("vocabulary error: {0}")]
    Vocabulary(String),

    /// Model training or shape errors
    #[error("model error: {0}")]
    Model(String),

    /// Artifact serialization/load errors (fatal at service startup)
    #[error("artifact error: {0}")]
    Artifact(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new corpus error
    pub fn corpus(msg: impl Into<String>) -> Self {
        Self::Corpus(msg.into())
    }

    /// Create a new vocabulary error
    pub fn vocabulary(msg: impl Into<String>) -> Self {
        Self::Vocabulary(msg.into())
    }

    /// Create a new model error
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }

    /// Create a new artifact error
    pub fn artifact(msg: impl Into<String>) -> Self {
        Self::Artifact(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
