use thiserror::Error;

/// Core error type for polls operations.
#[derive(Error, Debug)]
pub enum PollsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Absent or not yet published. The two cases are never distinguished.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for PollsError {
    fn from(e: serde_json::Error) -> Self {
        PollsError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for PollsError {
    fn from(e: toml::de::Error) -> Self {
        PollsError::Config(format!("Failed to parse config: {}", e))
    }
}

/// Result type alias using PollsError.
pub type Result<T> = std::result::Result<T, PollsError>;
