//! Error types for feedkata
//!
//! Feed operations are total and never produce errors; `AppError`
//! covers configuration, metrics registration and the explicit
//! "exhausted" failure of a skip sequence.

use thiserror::Error;

/// Application-wide error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// `try_next` called on a sequence with nothing staged
    #[error("Sequence exhausted")]
    SequenceExhausted,

    /// Prometheus registry error
    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
