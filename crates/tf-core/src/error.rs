//! Error types for TipForge

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum TipError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid tip: {0}")]
    InvalidTip(String),

    #[error("Invalid batch size: {0}")]
    InvalidBatchSize(String),

    #[error("Gave up after {draws} draws with {produced} of {requested} unique tips")]
    DrawLimitExceeded {
        requested: usize,
        produced: usize,
        draws: usize,
    },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid config: {0}")]
    Config(String),
}

/// Result type alias
pub type TipResult<T> = Result<T, TipError>;
