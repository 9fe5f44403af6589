//! Configuration management for the resume screener

use crate::error::{Result, ResumeScreenerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    pub extraction: ExtractionConfig,
    pub processing: ProcessingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Root of the local document store; folder selectors resolve against it.
    pub documents_root: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Place-name list, one per row, first column used.
    pub places_file: PathBuf,
    /// Filename prefix of the job-portal export naming convention.
    pub name_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    pub batch_size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub directory: PathBuf,
    pub filename: String,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Csv,
    Json,
    Markdown,
    Console,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig {
                documents_root: PathBuf::from("resumes"),
            },
            extraction: ExtractionConfig {
                places_file: PathBuf::from("places.csv"),
                name_prefix: "naukri_".to_string(),
            },
            processing: ProcessingConfig { batch_size: 8 },
            output: OutputConfig {
                format: OutputFormat::Csv,
                directory: PathBuf::from("output"),
                filename: "resume_info.csv".to_string(),
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from an explicit file, or from the default location (created
    /// with defaults when absent).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ResumeScreenerError::Configuration(format!(
                        "Config file does not exist: {}",
                        path.display()
                    )));
                }
                Self::from_file(path)
            }
            None => {
                let config_path = Self::config_path();
                if config_path.exists() {
                    Self::from_file(&config_path)
                } else {
                    let config = Self::default();
                    config.save_to(&config_path)?;
                    Ok(config)
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ResumeScreenerError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeScreenerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-screener")
            .join("config.toml")
    }

    /// Default location of the generated report.
    pub fn output_path(&self) -> PathBuf {
        self.output.directory.join(&self.output.filename)
    }

    /// Set a single value addressed by its dotted key, e.g. `processing.batch_size`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "input.documents_root" => self.input.documents_root = PathBuf::from(value),
            "extraction.places_file" => self.extraction.places_file = PathBuf::from(value),
            "extraction.name_prefix" => self.extraction.name_prefix = value.to_string(),
            "processing.batch_size" => {
                let batch_size: usize = value.parse().map_err(|_| {
                    ResumeScreenerError::Configuration(format!("Invalid batch size: {}", value))
                })?;
                if batch_size == 0 {
                    return Err(ResumeScreenerError::Configuration(
                        "Batch size must be at least 1".to_string(),
                    ));
                }
                self.processing.batch_size = batch_size;
            }
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(ResumeScreenerError::Configuration)?;
            }
            "output.directory" => self.output.directory = PathBuf::from(value),
            "output.filename" => self.output.filename = value.to_string(),
            "output.color_output" => {
                self.output.color_output = value.parse().map_err(|_| {
                    ResumeScreenerError::Configuration(format!("Expected true or false, got: {}", value))
                })?;
            }
            _ => {
                return Err(ResumeScreenerError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::default();
        config.save_to(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.output_path(), PathBuf::from("output").join("resume_info.csv"));
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(ResumeScreenerError::Configuration(_))));
    }

    #[test]
    fn test_set_values() {
        let mut config = Config::default();
        config.set("processing.batch_size", "2").unwrap();
        config.set("output.format", "json").unwrap();
        config.set("extraction.name_prefix", "portal_").unwrap();

        assert_eq!(config.processing.batch_size, 2);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.extraction.name_prefix, "portal_");

        assert!(config.set("processing.batch_size", "0").is_err());
        assert!(config.set("scoring.weight", "1").is_err());
    }
}
