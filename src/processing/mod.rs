//! Field extraction pipeline: skill gate, extractors and record assembly

pub mod builder;
pub mod document;
pub mod extractors;
pub mod gazetteer;
pub mod name;
pub mod skill_matcher;
pub mod tagger;

pub use builder::{BatchResult, DocumentOutcome, RecordBuilder, SkipReason, SkippedDocument};
pub use document::{CandidateRecord, Document};
pub use gazetteer::Gazetteer;
pub use skill_matcher::{SkillMatcher, SkillRequest};
pub use tagger::{HeuristicTagger, Tagger};
