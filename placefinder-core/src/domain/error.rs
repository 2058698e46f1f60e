use thiserror::Error;

/// Domain-specific errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Lexicon loading or parsing error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Unsupported lexicon requested
    #[error("Unsupported lexicon: {0}")]
    UnsupportedLexicon(String),

    /// Lexicon parsed but its contents are unusable
    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),
}

/// Failure reported by a part-of-speech oracle
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OracleError {
    /// The tagger backend could not be reached or loaded
    #[error("POS tagger unavailable: {0}")]
    Unavailable(String),
}
