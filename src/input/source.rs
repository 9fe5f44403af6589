//! Document sources: where the batch of resumes is enumerated from

use crate::error::{Result, ResumeScreenerError};
use crate::input::file_detector::FileType;
use crate::processing::document::Document;
use log::{debug, info, warn};
use std::future::Future;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Enumerates documents under a folder selector. Order of the returned
/// documents is the order records are reported in.
pub trait DocumentSource {
    fn list_documents(&self, folder: &str) -> impl Future<Output = Result<Vec<Document>>> + Send;

    fn list_folders(&self) -> impl Future<Output = Result<Vec<String>>> + Send;
}

/// A local directory tree standing in for an object-store container.
/// Folder selectors are paths relative to `root`.
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, folder: &str) -> Result<PathBuf> {
        let selector = Path::new(folder.trim_matches('/'));
        if selector
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(ResumeScreenerError::InvalidInput(format!(
                "Folder selector must be relative to the document store: {}",
                folder
            )));
        }
        Ok(self.root.join(selector))
    }

    fn relative_name(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }

    async fn walk(&self, start: PathBuf) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut pending = vec![start];

        while let Some(dir) = pending.pop() {
            let mut entries = fs::read_dir(&dir).await?;
            while let Some(entry) = entries.next_entry().await? {
                let file_type = entry.file_type().await?;
                if file_type.is_dir() {
                    pending.push(entry.path());
                } else if file_type.is_file() {
                    files.push(entry.path());
                }
            }
        }

        Ok(files)
    }

    /// A read failure is carried on the document so the batch can skip it.
    async fn read_document(name: String, path: &Path) -> Document {
        match fs::read(path).await {
            Ok(content) => {
                debug!("Listed {} ({} bytes)", name, content.len());
                Document::new(name, content)
            }
            Err(e) => {
                warn!("Could not read {}: {}", name, e);
                Document::unreadable(name, e.to_string())
            }
        }
    }
}

impl DocumentSource for DirectorySource {
    async fn list_documents(&self, folder: &str) -> Result<Vec<Document>> {
        let start = self.resolve(folder)?;
        if !start.is_dir() {
            return Err(ResumeScreenerError::InvalidInput(format!(
                "Folder does not exist in document store: {}",
                start.display()
            )));
        }

        let mut named: Vec<(String, PathBuf)> = self
            .walk(start)
            .await?
            .into_iter()
            .map(|path| (self.relative_name(&path), path))
            .collect();
        named.sort_by(|a, b| a.0.cmp(&b.0));

        let mut documents = Vec::with_capacity(named.len());
        for (name, path) in named {
            let listed = Document::new(name, Vec::new());
            // Unsupported files are reported by name only
            let document = if listed.file_type() == FileType::Unknown {
                listed
            } else {
                Self::read_document(listed.filename, &path).await
            };
            documents.push(document);
        }

        info!("Found {} documents under '{}'", documents.len(), folder);
        Ok(documents)
    }

    async fn list_folders(&self) -> Result<Vec<String>> {
        let mut folders = Vec::new();
        let mut entries = fs::read_dir(&self.root).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_dir() {
                folders.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        folders.sort();
        Ok(folders)
    }
}
