//! Error handling for the resume screener

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeScreenerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("Document could not be read: {0}")]
    DocumentRead(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Gazetteer loading error: {0}")]
    GazetteerLoad(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeScreenerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeScreenerError {
    fn from(err: anyhow::Error) -> Self {
        ResumeScreenerError::Processing(err.to_string())
    }
}
