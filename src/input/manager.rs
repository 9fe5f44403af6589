//! Input manager for routing documents to the right extractor

use crate::error::{Result, ResumeScreenerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, TextExtractor};
use crate::processing::document::Document;
use log::debug;

pub struct InputManager {
    pdf: PdfExtractor,
    docx: DocxExtractor,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            pdf: PdfExtractor,
            docx: DocxExtractor::new(),
        }
    }

    /// Acquire the plain text of a document. Unsupported extensions are
    /// rejected before any decoding is attempted.
    pub fn extract_text(&self, document: &Document) -> Result<String> {
        let file_type = document.file_type();
        let extractor: &dyn TextExtractor = match file_type {
            FileType::Pdf => &self.pdf,
            FileType::Docx => &self.docx,
            FileType::Unknown => {
                return Err(ResumeScreenerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    document.filename
                )));
            }
        };

        if let Some(reason) = &document.read_error {
            return Err(ResumeScreenerError::DocumentRead(format!(
                "{}: {}",
                document.filename, reason
            )));
        }

        debug!("Extracting text from {:?}: {}", file_type, document.filename);
        let text = extractor.extract(&document.content)?;

        debug!("Extracted {} characters from {}", text.len(), document.filename);
        Ok(text)
    }
}
