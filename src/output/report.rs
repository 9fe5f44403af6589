//! Report structures handed to the output formatters

use crate::processing::builder::{BatchResult, SkipReason, SkippedDocument};
use crate::processing::document::CandidateRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything one extraction run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub metadata: ReportMetadata,

    /// One row per qualifying document, in enumeration order
    pub records: Vec<CandidateRecord>,

    /// Documents that produced no row, with the reason
    pub skipped: Vec<SkippedDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub folder: String,
    pub requested_skills: Vec<String>,
    pub documents_seen: usize,
    pub records_created: usize,
    pub unsupported: usize,
    pub decode_failures: usize,
    pub without_skill_match: usize,
}

impl BatchReport {
    pub fn new(folder: &str, requested_skills: &[String], result: BatchResult) -> Self {
        let count = |wanted: fn(&SkipReason) -> bool| {
            result.skipped.iter().filter(|s| wanted(&s.reason)).count()
        };

        let metadata = ReportMetadata {
            generated_at: Utc::now(),
            folder: folder.to_string(),
            requested_skills: requested_skills.to_vec(),
            documents_seen: result.documents_seen(),
            records_created: result.records.len(),
            unsupported: count(|r| matches!(r, SkipReason::UnsupportedFormat)),
            decode_failures: count(|r| matches!(r, SkipReason::DecodeFailure(_))),
            without_skill_match: count(|r| matches!(r, SkipReason::NoSkillMatch)),
        };

        Self {
            metadata,
            records: result.records,
            skipped: result.skipped,
        }
    }

    /// Skips caused by unreadable or unsupported documents, as opposed to
    /// documents filtered out by the skill gate.
    pub fn failures(&self) -> impl Iterator<Item = &SkippedDocument> {
        self.skipped
            .iter()
            .filter(|skipped| skipped.reason != SkipReason::NoSkillMatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_counts_skip_reasons() {
        let result = BatchResult {
            records: Vec::new(),
            skipped: vec![
                SkippedDocument {
                    filename: "a.txt".to_string(),
                    reason: SkipReason::UnsupportedFormat,
                },
                SkippedDocument {
                    filename: "b.pdf".to_string(),
                    reason: SkipReason::DecodeFailure("bad xref".to_string()),
                },
                SkippedDocument {
                    filename: "c.pdf".to_string(),
                    reason: SkipReason::NoSkillMatch,
                },
                SkippedDocument {
                    filename: "d.docx".to_string(),
                    reason: SkipReason::NoSkillMatch,
                },
            ],
        };

        let report = BatchReport::new("batch1", &["Rust".to_string()], result);

        assert_eq!(report.metadata.documents_seen, 4);
        assert_eq!(report.metadata.records_created, 0);
        assert_eq!(report.metadata.unsupported, 1);
        assert_eq!(report.metadata.decode_failures, 1);
        assert_eq!(report.metadata.without_skill_match, 2);

        let failures: Vec<&str> = report.failures().map(|s| s.filename.as_str()).collect();
        assert_eq!(failures, vec!["a.txt", "b.pdf"]);
    }
}
