//! Error handling for the jobfit engine and CLI

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobFitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, JobFitError>;

/// Convert anyhow errors from the binary boundary into our error type
impl From<anyhow::Error> for JobFitError {
    fn from(err: anyhow::Error) -> Self {
        JobFitError::Processing(err.to_string())
    }
}
