use thiserror::Error;

/// Main error type for the match engine
#[derive(Error, Debug)]
pub enum MatchEngineError {
    /// File access errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rejected configuration values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed roster row
    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, MatchEngineError>;
