//! Text extraction from PDF and DOCX byte streams

use crate::error::{Result, ResumeScreenerError};
use regex::{Captures, Regex};
use std::io::{Cursor, Read};
use std::panic;

pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        // pdf-extract panics on some malformed streams
        let outcome = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));

        match outcome {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(ResumeScreenerError::PdfExtraction(format!(
                "Failed to extract text from PDF: {}",
                e
            ))),
            Err(_) => Err(ResumeScreenerError::PdfExtraction(
                "PDF decoder aborted on a malformed stream".to_string(),
            )),
        }
    }
}

/// Raw text from the main part of a WordprocessingML package.
pub struct DocxExtractor {
    field_code_regex: Regex,
    deleted_text_regex: Regex,
    paragraph_end_regex: Regex,
    line_break_regex: Regex,
    tab_regex: Regex,
    tag_regex: Regex,
    entity_regex: Regex,
}

const DOCUMENT_PART: &str = "word/document.xml";

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxExtractor {
    pub fn new() -> Self {
        Self {
            field_code_regex: Regex::new(r"(?s)<w:instrText[^>]*>.*?</w:instrText>")
                .expect("Invalid field code regex"),
            deleted_text_regex: Regex::new(r"(?s)<w:delText[^>]*>.*?</w:delText>")
                .expect("Invalid deleted text regex"),
            paragraph_end_regex: Regex::new(r"</w:p>").expect("Invalid paragraph regex"),
            line_break_regex: Regex::new(r"<w:(?:br|cr)\b[^>]*/>").expect("Invalid line break regex"),
            tab_regex: Regex::new(r"<w:tab\s*/>").expect("Invalid tab regex"),
            tag_regex: Regex::new(r"<[^>]*>").expect("Invalid tag regex"),
            entity_regex: Regex::new(r"&(?:#[xX]([0-9a-fA-F]+)|#(\d+)|(lt|gt|quot|apos|amp));")
                .expect("Invalid entity regex"),
        }
    }

    fn read_document_part(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| {
            ResumeScreenerError::DocxExtraction(format!("Not a valid DOCX package: {}", e))
        })?;

        let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| {
            ResumeScreenerError::DocxExtraction(format!("Missing {}: {}", DOCUMENT_PART, e))
        })?;

        let mut xml = String::new();
        part.read_to_string(&mut xml).map_err(|e| {
            ResumeScreenerError::DocxExtraction(format!("Unreadable {}: {}", DOCUMENT_PART, e))
        })?;
        Ok(xml)
    }

    pub fn xml_to_text(&self, xml: &str) -> String {
        let text = self.field_code_regex.replace_all(xml, "");
        let text = self.deleted_text_regex.replace_all(&text, "");
        let text = self.paragraph_end_regex.replace_all(&text, "\n\n");
        let text = self.line_break_regex.replace_all(&text, "\n");
        let text = self.tab_regex.replace_all(&text, "\t");
        let text = self.tag_regex.replace_all(&text, "");

        // Single pass, so `&amp;lt;` stays `&lt;`
        self.entity_regex
            .replace_all(&text, |caps: &Captures| {
                decode_entity(caps).map_or_else(|| caps[0].to_string(), String::from)
            })
            .into_owned()
    }
}

fn decode_entity(caps: &Captures) -> Option<char> {
    if let Some(hex) = caps.get(1) {
        return u32::from_str_radix(hex.as_str(), 16).ok().and_then(char::from_u32);
    }
    if let Some(decimal) = caps.get(2) {
        return decimal.as_str().parse().ok().and_then(char::from_u32);
    }
    match caps.get(3)?.as_str() {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "amp" => Some('&'),
        _ => None,
    }
}

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let xml = self.read_document_part(bytes)?;
        Ok(self.xml_to_text(&xml))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_to_text_keeps_paragraphs_and_drops_markup() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document><w:body>
<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>Jane Roe</w:t></w:r></w:p>
<w:p><w:r><w:t xml:space="preserve">Skills:</w:t></w:r><w:r><w:tab/><w:t>C&amp;C++</w:t></w:r><w:r><w:br/><w:t>Rust</w:t></w:r></w:p>
<w:p><w:r><w:instrText> HYPERLINK "mailto:x@y.com" </w:instrText></w:r><w:r><w:t>jane@example.com</w:t></w:r></w:p>
</w:body></w:document>"#;

        let text = DocxExtractor::new().xml_to_text(xml);

        assert!(text.contains("Jane Roe\n\n"));
        assert!(text.contains("Skills:\tC&C++\nRust"));
        assert!(text.contains("jane@example.com"));
        assert!(!text.contains("HYPERLINK"));
        assert!(!text.contains("<w:"));
    }

    #[test]
    fn test_character_references_are_decoded() {
        let docx = DocxExtractor::new();
        let xml = "<w:t>2019&#8211;2023 at O&#x2019;Reilly &amp; Sons, &#39;R&amp;D&#39;</w:t>";

        assert_eq!(docx.xml_to_text(xml), "2019\u{2013}2023 at O\u{2019}Reilly & Sons, 'R&D'");
        assert_eq!(docx.xml_to_text("&amp;lt;tag&amp;gt;"), "&lt;tag&gt;");
        assert_eq!(docx.xml_to_text("bad &#xD800; ref"), "bad &#xD800; ref");
    }

    #[test]
    fn test_docx_rejects_non_zip_bytes() {
        let result = DocxExtractor::new().extract(b"definitely not a zip archive");
        assert!(matches!(result, Err(ResumeScreenerError::DocxExtraction(_))));
    }

    #[test]
    fn test_pdf_rejects_garbage() {
        let result = PdfExtractor.extract(b"%PDF-1.4 truncated");
        assert!(matches!(result, Err(ResumeScreenerError::PdfExtraction(_))));
    }
}
