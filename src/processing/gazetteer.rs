//! Place-name gazetteer and location lookup

use crate::error::{Result, ResumeScreenerError};
use log::info;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Lowercased place names, loaded once per run and shared read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gazetteer {
    places: HashSet<String>,
}

impl Gazetteer {
    pub fn from_places<I, S>(places: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let places = places
            .into_iter()
            .map(|place| place.as_ref().trim().to_lowercase())
            .filter(|place| !place.is_empty())
            .collect();
        Self { places }
    }

    /// Load from a CSV-style list; only the first column of each row is used.
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| {
            ResumeScreenerError::GazetteerLoad(format!("Cannot open {}: {}", path.display(), e))
        })?;

        let gazetteer = Self::from_reader(file).map_err(|e| {
            ResumeScreenerError::GazetteerLoad(format!("Cannot read {}: {}", path.display(), e))
        })?;

        info!("Loaded {} place names from {}", gazetteer.len(), path.display());
        Ok(gazetteer)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut places = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            if let Some(first) = record.get(0) {
                places.push(first.to_string());
            }
        }

        Ok(Self::from_places(places))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.places.contains(word)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Leftmost single word of the text that is a known place. The text is
    /// lowercased and stripped of punctuation before splitting on whitespace.
    pub fn find_location(&self, text: &str) -> Option<String> {
        let normalized: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
            .collect();

        normalized
            .split_whitespace()
            .find(|word| self.places.contains(*word))
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_uses_first_column() {
        let data = "Austin,TX,US\nPune,MH\n\n  Bengaluru  \nNew York,NY\n";
        let gazetteer = Gazetteer::from_reader(data.as_bytes()).unwrap();

        assert_eq!(gazetteer.len(), 4);
        assert!(gazetteer.contains("austin"));
        assert!(gazetteer.contains("bengaluru"));
        assert!(gazetteer.contains("new york"));
        assert!(!gazetteer.contains("tx"));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let result = Gazetteer::load(Path::new("does/not/exist/places.csv"));
        assert!(matches!(result, Err(ResumeScreenerError::GazetteerLoad(_))));
    }

    #[test]
    fn test_find_location_after_punctuation_strip() {
        let gazetteer = Gazetteer::from_places(["Austin", "Pune", "New York"]);

        assert_eq!(
            gazetteer.find_location("Senior dev based in Austin, TX. Relocating to Pune"),
            Some("austin".to_string())
        );
        assert_eq!(gazetteer.find_location("(Pune)"), Some("pune".to_string()));
        assert_eq!(gazetteer.find_location("Lives in New York"), None);
        assert_eq!(gazetteer.find_location("Austinite"), None);
    }
}
