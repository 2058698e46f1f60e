//! Error types for the API

use crate::domain::DomainError;
use thiserror::Error;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Lexicon could not be loaded or validated
    #[error("Lexicon error: {0}")]
    Lexicon(#[from] DomainError),

    /// Infrastructure error (I/O, etc.)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
