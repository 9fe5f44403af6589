//! Candidate name extraction: filename convention first, then a proper-noun
//! sequence in the body text

use crate::processing::extractors::UNKNOWN;
use crate::processing::tagger::{PartOfSpeech, PosPattern, Tagger};
use regex::Regex;
use std::sync::Arc;

pub trait NameStrategy: Send + Sync {
    /// Whether this strategy is responsible for the document.
    fn applies(&self, file_name: &str) -> bool;

    fn extract(&self, file_name: &str, text: &str) -> Option<String>;
}

/// Names embedded in export filenames such as `Naukri_JohnDoe_[3y_2m].pdf`.
/// A matching prefix with no alphabetic run yields `Unknown`.
pub struct FilenamePrefixStrategy {
    prefix: String,
    name_regex: Regex,
}

impl FilenamePrefixStrategy {
    pub fn new(prefix: &str) -> Self {
        let pattern = format!(r"(?i)^{}([A-Za-z]+)", regex::escape(prefix));
        Self {
            prefix: prefix.to_lowercase(),
            name_regex: Regex::new(&pattern).expect("Escaped prefix always forms a valid regex"),
        }
    }
}

impl NameStrategy for FilenamePrefixStrategy {
    fn applies(&self, file_name: &str) -> bool {
        file_name.to_lowercase().starts_with(&self.prefix)
    }

    fn extract(&self, file_name: &str, _text: &str) -> Option<String> {
        let name = self
            .name_regex
            .captures(file_name)
            .and_then(|caps| caps.get(1))
            .map(|m| capitalize(m.as_str()))
            .unwrap_or_else(|| UNKNOWN.to_string());
        Some(name)
    }
}

/// First run of consecutive proper nouns, trying lengths 2, 3 and 4 in that
/// order. The span is returned exactly as it appears in the text.
pub struct ProperNounStrategy {
    tagger: Arc<dyn Tagger>,
    patterns: Vec<PosPattern>,
}

impl ProperNounStrategy {
    pub fn new(tagger: Arc<dyn Tagger>) -> Self {
        let patterns = (2..=4)
            .map(|len| PosPattern::repeat(PartOfSpeech::ProperNoun, len))
            .collect();
        Self { tagger, patterns }
    }
}

impl NameStrategy for ProperNounStrategy {
    fn applies(&self, _file_name: &str) -> bool {
        true
    }

    fn extract(&self, _file_name: &str, text: &str) -> Option<String> {
        let tokens = self.tagger.tag(text);

        // Spans come from a pluggable tagger and may not fall on char boundaries
        self.patterns.iter().find_map(|pattern| {
            let range = pattern.find_first(&tokens)?;
            let start = tokens[range.start].span.start;
            let end = tokens[range.end - 1].span.end;
            text.get(start..end).map(str::to_string)
        })
    }
}

/// Strategies in priority order; the first one that applies decides.
pub struct NameExtractor {
    strategies: Vec<Box<dyn NameStrategy>>,
}

impl NameExtractor {
    pub fn new(strategies: Vec<Box<dyn NameStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn with_defaults(prefix: &str, tagger: Arc<dyn Tagger>) -> Self {
        let strategies: Vec<Box<dyn NameStrategy>> = vec![
            Box::new(FilenamePrefixStrategy::new(prefix)),
            Box::new(ProperNounStrategy::new(tagger)),
        ];
        Self::new(strategies)
    }

    pub fn extract(&self, file_name: &str, text: &str) -> Option<String> {
        self.strategies
            .iter()
            .find(|strategy| strategy.applies(file_name))
            .and_then(|strategy| strategy.extract(file_name, text))
    }
}

/// Upper-case the first character, lower-case the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::tagger::{HeuristicTagger, TaggedToken};

    /// Tags every whitespace-separated word from a fixed list as a proper noun.
    struct StubTagger(Vec<&'static str>);

    impl Tagger for StubTagger {
        fn tag(&self, text: &str) -> Vec<TaggedToken> {
            let mut tokens = Vec::new();
            let mut offset = 0;
            for word in text.split(' ') {
                let pos = if self.0.iter().any(|known| *known == word) {
                    PartOfSpeech::ProperNoun
                } else {
                    PartOfSpeech::Other
                };
                tokens.push(TaggedToken {
                    text: word.to_string(),
                    span: offset..offset + word.len(),
                    pos,
                });
                offset += word.len() + 1;
            }
            tokens
        }
    }

    /// Reports every word as a proper noun with a fixed, possibly invalid span.
    struct FixedSpanTagger(std::ops::Range<usize>);

    impl Tagger for FixedSpanTagger {
        fn tag(&self, text: &str) -> Vec<TaggedToken> {
            text.split(' ')
                .map(|word| TaggedToken {
                    text: word.to_string(),
                    span: self.0.clone(),
                    pos: PartOfSpeech::ProperNoun,
                })
                .collect()
        }
    }

    fn extractor(tagger: impl Tagger + 'static) -> NameExtractor {
        NameExtractor::with_defaults("naukri_", Arc::new(tagger))
    }

    #[test]
    fn test_prefix_strategy_wins_over_text() {
        let names = extractor(StubTagger(vec!["Alice", "Smith"]));

        assert_eq!(
            names.extract("Naukri_JohnDoe_[3y_2m].pdf", "Alice Smith"),
            Some("Johndoe".to_string())
        );
        assert_eq!(
            names.extract("naukri_priya[2y_0m].docx", "Alice Smith"),
            Some("Priya".to_string())
        );
    }

    #[test]
    fn test_prefix_without_name_is_unknown() {
        let names = extractor(StubTagger(vec!["Alice", "Smith"]));
        assert_eq!(names.extract("NAUKRI_123.pdf", "Alice Smith"), Some("Unknown".to_string()));
    }

    #[test]
    fn test_proper_noun_sequence_from_text() {
        let names = extractor(StubTagger(vec!["Alice", "Marie", "Smith"]));

        assert_eq!(
            names.extract("resume.pdf", "cv of Alice Marie Smith engineer"),
            Some("Alice Marie".to_string())
        );
        assert_eq!(names.extract("resume.pdf", "cv of Alice only"), None);
    }

    #[test]
    fn test_invalid_tagger_spans_yield_no_name() {
        // 'É' is two bytes, so offset 1 is inside it
        let names = extractor(FixedSpanTagger(1..3));
        assert_eq!(names.extract("resume.pdf", "Élodie Durand"), None);

        let names = extractor(FixedSpanTagger(0..500));
        assert_eq!(names.extract("resume.pdf", "Jane Roe"), None);
    }

    #[test]
    fn test_heuristic_tagger_reads_header_name() {
        let names = extractor(HeuristicTagger::new());
        let text = "Jane   Roe\nSoftware Engineer\nSkills: Python";
        assert_eq!(names.extract("resume.pdf", text), Some("Jane   Roe".to_string()));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("JOHNDOE"), "Johndoe");
        assert_eq!(capitalize("j"), "J");
        assert_eq!(capitalize(""), "");
    }
}
