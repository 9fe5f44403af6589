//! Input processing module
//! Handles document listing, file detection and text extraction

pub mod file_detector;
pub mod manager;
pub mod source;
pub mod text_extractor;

pub use manager::InputManager;
pub use source::{DirectorySource, DocumentSource};
