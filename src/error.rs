//! Error handling for the ATS analyzer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, AtsError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for AtsError {
    fn from(err: anyhow::Error) -> Self {
        AtsError::Processing(err.to_string())
    }
}
