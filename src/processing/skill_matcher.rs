//! Requested-skill matching and the admission gate for records

use crate::error::{Result, ResumeScreenerError};
use aho_corasick::{AhoCorasick, MatchKind};
use std::collections::HashSet;

/// Caller-supplied skills in request order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRequest {
    skills: Vec<String>,
}

impl SkillRequest {
    pub fn new<I, S>(skills: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let skills: Vec<String> = skills
            .into_iter()
            .map(|skill| skill.as_ref().trim().to_string())
            .filter(|skill| !skill.is_empty())
            .collect();

        if skills.is_empty() {
            return Err(ResumeScreenerError::InvalidInput(
                "At least one skill must be requested".to_string(),
            ));
        }

        Ok(Self { skills })
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }
}

/// Case-insensitive substring matcher over the requested skills.
pub struct SkillMatcher {
    request: SkillRequest,
    automaton: AhoCorasick,
    /// Automaton pattern for each requested skill, by request position.
    pattern_ids: Vec<usize>,
}

impl SkillMatcher {
    pub fn new(request: SkillRequest) -> Result<Self> {
        let mut patterns: Vec<String> = Vec::new();
        let mut pattern_ids = Vec::with_capacity(request.skills.len());
        for skill in &request.skills {
            let lowered = skill.to_lowercase();
            let id = match patterns.iter().position(|p| *p == lowered) {
                Some(id) => id,
                None => {
                    patterns.push(lowered);
                    patterns.len() - 1
                }
            };
            pattern_ids.push(id);
        }

        // Standard semantics so overlapping skills ("Java", "JavaScript") all report
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .map_err(|e| ResumeScreenerError::Processing(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self {
            request,
            automaton,
            pattern_ids,
        })
    }

    pub fn request(&self) -> &SkillRequest {
        &self.request
    }

    /// Requested skills found in the text, in request order. `None` means
    /// the document does not qualify for a record.
    pub fn matches(&self, text: &str) -> Option<Vec<String>> {
        let lowered = text.to_lowercase();
        let found: HashSet<usize> = self
            .automaton
            .find_overlapping_iter(&lowered)
            .map(|m| m.pattern().as_usize())
            .collect();

        let matched: Vec<String> = self
            .request
            .skills
            .iter()
            .zip(&self.pattern_ids)
            .filter(|(_, id)| found.contains(*id))
            .map(|(skill, _)| skill.clone())
            .collect();

        if matched.is_empty() {
            None
        } else {
            Some(matched)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(skills: &[&str]) -> SkillMatcher {
        SkillMatcher::new(SkillRequest::new(skills.iter().copied()).unwrap()).unwrap()
    }

    #[test]
    fn test_request_rejects_blank_lists() {
        assert!(SkillRequest::new(["  ", ""]).is_err());
        let request = SkillRequest::new([" Python ", "", "SQL"]).unwrap();
        assert_eq!(request.skills(), &["Python".to_string(), "SQL".to_string()]);
    }

    #[test]
    fn test_matches_preserve_request_order_and_spelling() {
        let skills = matcher(&["SQL", "Java", "PYTHON", "Go Lang"]);
        let found = skills.matches("Worked with python and Postgres sql daily").unwrap();
        assert_eq!(found, vec!["SQL", "PYTHON"]);
    }

    #[test]
    fn test_overlapping_skills_all_match() {
        let skills = matcher(&["JavaScript", "Java", "Script"]);
        let found = skills.matches("Frontend: javascript").unwrap();
        assert_eq!(found, vec!["JavaScript", "Java", "Script"]);
    }

    #[test]
    fn test_duplicate_requests_are_reported_each_time() {
        let skills = matcher(&["Rust", "rust"]);
        assert_eq!(skills.matches("RUST").unwrap(), vec!["Rust", "rust"]);
    }

    #[test]
    fn test_no_match_is_none() {
        let skills = matcher(&["Kotlin"]);
        assert_eq!(skills.matches("Python, SQL"), None);
        assert_eq!(skills.matches(""), None);
    }
}
