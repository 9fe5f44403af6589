//! Resume screener library
//!
//! Acquires text from PDF and DOCX resumes, keeps those mentioning a
//! requested skill and extracts name, contact number, email, location and
//! experience into one record per candidate.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{Result, ResumeScreenerError};
