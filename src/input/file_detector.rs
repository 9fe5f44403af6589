//! File type detection

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Docx,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "docx" => FileType::Docx,
            _ => FileType::Unknown,
        }
    }

    pub fn from_filename(filename: &str) -> Self {
        Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileType::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_from_filename() {
        assert_eq!(FileType::from_filename("batch/Naukri_JaneRoe_[1y_0m].pdf"), FileType::Pdf);
        assert_eq!(FileType::from_filename("resume.DOCX"), FileType::Docx);
        assert_eq!(FileType::from_filename("resume.doc"), FileType::Unknown);
        assert_eq!(FileType::from_filename("README"), FileType::Unknown);
        assert_eq!(FileType::from_filename("notes.txt"), FileType::Unknown);
    }
}
