//! Part-of-speech tagging seam used by name extraction

use std::collections::HashSet;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    ProperNoun,
    Noun,
    Number,
    Punctuation,
    /// Whitespace that carries a line break.
    Space,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    /// Byte span in the tagged text.
    pub span: Range<usize>,
    pub pos: PartOfSpeech,
}

/// Tokenize and tag text. Implementations must be deterministic for
/// identical input.
pub trait Tagger: Send + Sync {
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

/// A contiguous sequence of parts of speech to look for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosPattern(Vec<PartOfSpeech>);

impl PosPattern {
    pub fn new(sequence: Vec<PartOfSpeech>) -> Self {
        Self(sequence)
    }

    pub fn repeat(pos: PartOfSpeech, count: usize) -> Self {
        Self(vec![pos; count])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Token index range of the earliest match.
    pub fn find_first(&self, tokens: &[TaggedToken]) -> Option<Range<usize>> {
        if self.0.is_empty() || tokens.len() < self.0.len() {
            return None;
        }

        tokens
            .windows(self.0.len())
            .position(|window| window.iter().zip(&self.0).all(|(token, pos)| token.pos == *pos))
            .map(|start| start..start + self.0.len())
    }
}

/// Capitalisation-driven tagger. A capitalised alphabetic word is a proper
/// noun unless it is a common word; line breaks are kept as `Space` tokens
/// so sequences never run across lines.
pub struct HeuristicTagger {
    common_words: HashSet<String>,
}

impl Default for HeuristicTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicTagger {
    pub fn new() -> Self {
        Self {
            common_words: Self::create_common_words(),
        }
    }

    fn create_common_words() -> HashSet<String> {
        [
            // function words
            "a", "an", "the", "and", "or", "but", "of", "in", "on", "at", "to", "for", "with",
            "by", "from", "as", "into", "over", "under", "about", "is", "am", "are", "was",
            "were", "be", "been", "i", "my", "me", "we", "our", "you", "your", "he", "she",
            "it", "they", "their", "this", "that", "these", "those", "have", "has", "had",
            "will", "can", "also", "not", "no", "yes", "per", "via",
            // resume vocabulary
            "resume", "curriculum", "vitae", "cv", "profile", "summary", "objective", "about",
            "skills", "skill", "technical", "core", "competencies", "experience", "work",
            "professional", "employment", "history", "education", "academic", "projects",
            "project", "certifications", "certification", "achievements", "awards",
            "languages", "interests", "hobbies", "references", "personal", "details",
            "contact", "phone", "mobile", "email", "address", "name", "date", "birth",
            "nationality", "declaration", "responsibilities", "role", "company", "present",
            "current", "senior", "junior", "lead", "manager", "engineer", "developer",
            "software", "data", "analyst", "intern", "internship", "university", "college",
            "school", "bachelor", "master", "degree", "team", "years", "year", "months",
            // calendar
            "january", "february", "march", "april", "may", "june", "july", "august",
            "september", "october", "november", "december", "jan", "feb", "mar", "apr",
            "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "monday", "tuesday",
            "wednesday", "thursday", "friday", "saturday", "sunday",
        ]
        .iter()
        .map(|word| word.to_string())
        .collect()
    }

    fn classify(&self, word: &str) -> PartOfSpeech {
        let mut chars = word.chars();
        let first = match chars.next() {
            Some(c) => c,
            None => return PartOfSpeech::Other,
        };

        if word.chars().all(|c| c.is_whitespace()) {
            return if word.contains('\n') || word.contains('\r') {
                PartOfSpeech::Space
            } else {
                PartOfSpeech::Other
            };
        }

        if word.chars().all(|c| c.is_numeric()) {
            return PartOfSpeech::Number;
        }

        if !word.chars().any(|c| c.is_alphanumeric()) {
            return PartOfSpeech::Punctuation;
        }

        if !word.chars().all(|c| c.is_alphabetic() || c == '\'') {
            return PartOfSpeech::Other;
        }

        if self.common_words.contains(&word.to_lowercase()) {
            return PartOfSpeech::Noun;
        }

        if first.is_uppercase() && chars.next().is_some() {
            PartOfSpeech::ProperNoun
        } else {
            PartOfSpeech::Noun
        }
    }
}

impl Tagger for HeuristicTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        text.split_word_bound_indices()
            .filter_map(|(start, word)| {
                let pos = self.classify(word);
                // plain inline whitespace separates tokens but is not one
                if pos == PartOfSpeech::Other && word.chars().all(|c| c.is_whitespace()) {
                    return None;
                }
                Some(TaggedToken {
                    text: word.to_string(),
                    span: start..start + word.len(),
                    pos,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(tokens: &[TaggedToken]) -> Vec<(&str, PartOfSpeech)> {
        tokens.iter().map(|t| (t.text.as_str(), t.pos)).collect()
    }

    #[test]
    fn test_heuristic_tagging() {
        let tagger = HeuristicTagger::new();
        let tokens = tagger.tag("Jane Roe\nSkills: Rust, 2019");

        assert_eq!(
            parts(&tokens),
            vec![
                ("Jane", PartOfSpeech::ProperNoun),
                ("Roe", PartOfSpeech::ProperNoun),
                ("\n", PartOfSpeech::Space),
                ("Skills", PartOfSpeech::Noun),
                (":", PartOfSpeech::Punctuation),
                ("Rust", PartOfSpeech::ProperNoun),
                (",", PartOfSpeech::Punctuation),
                ("2019", PartOfSpeech::Number),
            ]
        );
        assert_eq!(tokens[1].span, 5..8);
    }

    #[test]
    fn test_pattern_finds_earliest_window() {
        let tagger = HeuristicTagger::new();
        let tokens = tagger.tag("the Big Apple and New York City");

        let pair = PosPattern::repeat(PartOfSpeech::ProperNoun, 2);
        assert_eq!(pair.find_first(&tokens), Some(1..3));

        let triple = PosPattern::repeat(PartOfSpeech::ProperNoun, 3);
        assert_eq!(triple.find_first(&tokens), Some(4..7));

        let quad = PosPattern::repeat(PartOfSpeech::ProperNoun, 4);
        assert_eq!(quad.find_first(&tokens), None);
        assert_eq!(PosPattern::new(Vec::new()).find_first(&tokens), None);
    }
}
