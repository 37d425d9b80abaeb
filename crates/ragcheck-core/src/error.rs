use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Embedding provider error: {message}")]
    Embedding { message: String, rate_limited: bool },

    #[error("Vector index error: {0}")]
    Index(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn embedding(message: impl Into<String>) -> Self {
        Error::Embedding { message: message.into(), rate_limited: false }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Error::Embedding { message: message.into(), rate_limited: true }
    }

    /// Transient collaborator failures are retried; input and config
    /// errors surface immediately.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Embedding { .. } | Error::Index(_))
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::Embedding { rate_limited: true, .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
