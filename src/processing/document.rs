//! Document and record structures

use crate::input::file_detector::FileType;
use serde::{Deserialize, Serialize};

/// A resume as enumerated by the document source. Never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Name as listed by the source, possibly including folder segments.
    pub filename: String,
    pub content: Vec<u8>,
    /// Set when the source listed the document but could not read it.
    pub read_error: Option<String>,
}

impl Document {
    pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content,
            read_error: None,
        }
    }

    pub fn unreadable(filename: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: Vec::new(),
            read_error: Some(reason.into()),
        }
    }

    /// Final path component of the listed name.
    pub fn file_name(&self) -> &str {
        self.filename.rsplit('/').next().unwrap_or(&self.filename)
    }

    pub fn file_type(&self) -> FileType {
        FileType::from_filename(self.file_name())
    }
}

/// One output row. Field order is the report's column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Contact Number")]
    pub contact_number: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Skill")]
    pub skills: String,
    #[serde(rename = "Location")]
    pub location: Option<String>,
    #[serde(rename = "Experience")]
    pub experience: String,
    #[serde(rename = "Filename")]
    pub filename: String,
}

impl CandidateRecord {
    pub const COLUMNS: [&'static str; 7] = [
        "Name",
        "Contact Number",
        "Email",
        "Skill",
        "Location",
        "Experience",
        "Filename",
    ];

    /// Cell values in column order; absent values are empty.
    pub fn cells(&self) -> [&str; 7] {
        [
            self.name.as_deref().unwrap_or(""),
            &self.contact_number,
            &self.email,
            &self.skills,
            self.location.as_deref().unwrap_or(""),
            &self.experience,
            &self.filename,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_strips_folder_segments() {
        let doc = Document::new("batch1/2024/Naukri_JohnDoe_[3y_2m].pdf", Vec::new());
        assert_eq!(doc.file_name(), "Naukri_JohnDoe_[3y_2m].pdf");
        assert_eq!(doc.file_type(), FileType::Pdf);

        let flat = Document::new("resume.docx", Vec::new());
        assert_eq!(flat.file_name(), "resume.docx");
    }

    #[test]
    fn test_cells_follow_column_order() {
        let record = CandidateRecord {
            name: None,
            contact_number: "Not Found".to_string(),
            email: "a.b@example.com".to_string(),
            skills: "Python, SQL".to_string(),
            location: Some("austin".to_string()),
            experience: "Not Provided".to_string(),
            filename: "resume.pdf".to_string(),
        };

        assert_eq!(
            record.cells(),
            ["", "Not Found", "a.b@example.com", "Python, SQL", "austin", "Not Provided", "resume.pdf"]
        );
    }
}
