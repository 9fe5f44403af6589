//! CLI interface for the resume screener

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-screener")]
#[command(about = "Extract candidate details from a folder of resumes")]
#[command(long_about = "Scan PDF and DOCX resumes for requested skills and report name, contact number, email, location and experience for every match")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract candidate records from a folder of resumes
    Extract {
        /// Folder selector inside the document store
        #[arg(short, long, default_value = "")]
        folder: String,

        /// Requested skill (repeatable)
        #[arg(short = 'k', long = "skill")]
        skill: Vec<String>,

        /// Additional comma-separated skills, e.g. "Rust, Go"
        #[arg(short, long)]
        skills: Option<String>,

        /// Place-name list used for location detection
        #[arg(short, long)]
        places: Option<PathBuf>,

        /// Root directory of the document store
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Output format: csv, json, markdown, console
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,

        /// Number of documents decoded concurrently
        #[arg(short, long)]
        batch_size: Option<usize>,
    },

    /// List folders available in the document store
    Folders {
        /// Root directory of the document store
        #[arg(short, long)]
        root: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "processing.batch_size")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "csv" => Ok(crate::config::OutputFormat::Csv),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "console" => Ok(crate::config::OutputFormat::Console),
        _ => Err(format!("Invalid output format: {}. Supported: csv, json, markdown, console", format)),
    }
}

/// Combine individually requested skills with a comma-separated list,
/// trimming entries and dropping empty ones. Order is preserved.
pub fn collect_skills(individual: &[String], comma_separated: Option<&str>) -> Vec<String> {
    individual
        .iter()
        .map(String::as_str)
        .chain(comma_separated.into_iter().flat_map(|list| list.split(',')))
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}
