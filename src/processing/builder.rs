//! Record builder: runs acquisition, the skill gate and the field
//! extractors for each document of a batch

use crate::error::{Result, ResumeScreenerError};
use crate::input::manager::InputManager;
use crate::processing::document::{CandidateRecord, Document};
use crate::processing::extractors::FieldExtractor;
use crate::processing::gazetteer::Gazetteer;
use crate::processing::name::NameExtractor;
use crate::processing::skill_matcher::{SkillMatcher, SkillRequest};
use crate::processing::tagger::Tagger;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    UnsupportedFormat,
    DecodeFailure(String),
    NoSkillMatch,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnsupportedFormat => write!(f, "unsupported format"),
            SkipReason::DecodeFailure(reason) => write!(f, "decode failure: {}", reason),
            SkipReason::NoSkillMatch => write!(f, "no requested skill found"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedDocument {
    pub filename: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    Record(CandidateRecord),
    Skipped(SkipReason),
}

/// Records in enumeration order plus every document that produced none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub records: Vec<CandidateRecord>,
    pub skipped: Vec<SkippedDocument>,
}

impl BatchResult {
    fn push(&mut self, filename: String, outcome: DocumentOutcome) {
        match outcome {
            DocumentOutcome::Record(record) => self.records.push(record),
            DocumentOutcome::Skipped(reason) => self.skipped.push(SkippedDocument { filename, reason }),
        }
    }

    pub fn documents_seen(&self) -> usize {
        self.records.len() + self.skipped.len()
    }
}

/// Immutable per-run pipeline. The gazetteer, skill matcher and tagger are
/// loaded once and shared by every document.
#[derive(Clone)]
pub struct RecordBuilder {
    input: Arc<InputManager>,
    fields: Arc<FieldExtractor>,
    names: Arc<NameExtractor>,
    gazetteer: Arc<Gazetteer>,
    skills: Arc<SkillMatcher>,
    batch_size: usize,
}

impl RecordBuilder {
    pub fn new(
        gazetteer: Gazetteer,
        skills: SkillRequest,
        tagger: Arc<dyn Tagger>,
        name_prefix: &str,
    ) -> Result<Self> {
        Ok(Self {
            input: Arc::new(InputManager::new()),
            fields: Arc::new(FieldExtractor::new()),
            names: Arc::new(NameExtractor::with_defaults(name_prefix, tagger)),
            gazetteer: Arc::new(gazetteer),
            skills: Arc::new(SkillMatcher::new(skills)?),
            batch_size: 1,
        })
    }

    /// Number of documents decoded concurrently by [`RecordBuilder::run`].
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn skill_request(&self) -> &SkillRequest {
        self.skills.request()
    }

    /// Process a single document. Never fails: every problem becomes a skip.
    pub fn process(&self, document: &Document) -> DocumentOutcome {
        let text = match self.input.extract_text(document) {
            Ok(text) => text,
            Err(ResumeScreenerError::UnsupportedFormat(_)) => {
                info!("{} is not a PDF or DOCX file. Skipping...", document.filename);
                return DocumentOutcome::Skipped(SkipReason::UnsupportedFormat);
            }
            Err(e) => {
                warn!("Skipping {}: {}", document.filename, e);
                return DocumentOutcome::Skipped(SkipReason::DecodeFailure(e.to_string()));
            }
        };

        self.build_record(document, &text)
    }

    /// Skill gate and field extraction over already acquired text.
    pub fn build_record(&self, document: &Document, text: &str) -> DocumentOutcome {
        let found_skills = match self.skills.matches(text) {
            Some(found) => found,
            None => {
                debug!("No requested skill in {}", document.filename);
                return DocumentOutcome::Skipped(SkipReason::NoSkillMatch);
            }
        };

        let file_name = document.file_name();
        let record = CandidateRecord {
            name: self.names.extract(file_name, text),
            contact_number: self.fields.contact_number(text),
            email: self.fields.email(text),
            skills: found_skills.join(", "),
            location: self.gazetteer.find_location(text),
            experience: self.fields.experience(file_name),
            filename: document.filename.clone(),
        };

        debug!("Built record for {}", document.filename);
        DocumentOutcome::Record(record)
    }

    /// Sequential equivalent of [`RecordBuilder::run`].
    pub fn build_all(&self, documents: &[Document]) -> BatchResult {
        let mut result = BatchResult::default();
        for document in documents {
            result.push(document.filename.clone(), self.process(document));
        }
        result
    }

    /// Process documents on the blocking pool, `batch_size` at a time.
    /// Windows are awaited in order, so records keep enumeration order.
    pub async fn run(&self, documents: Vec<Document>) -> BatchResult {
        let mut result = BatchResult::default();
        let mut pending = documents.into_iter().peekable();

        while pending.peek().is_some() {
            let handles: Vec<_> = pending
                .by_ref()
                .take(self.batch_size)
                .map(|document| {
                    let builder = self.clone();
                    let filename = document.filename.clone();
                    let handle = tokio::task::spawn_blocking(move || builder.process(&document));
                    (filename, handle)
                })
                .collect();

            for (filename, handle) in handles {
                let outcome = match handle.await {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        warn!("Skipping {}: worker failed: {}", filename, e);
                        DocumentOutcome::Skipped(SkipReason::DecodeFailure(format!("worker failed: {}", e)))
                    }
                };
                result.push(filename, outcome);
            }
        }

        info!(
            "Processed {} documents: {} records, {} skipped",
            result.documents_seen(),
            result.records.len(),
            result.skipped.len()
        );
        result
    }
}
