use super::DocumentStore;
use crate::error::{CurioError, Result};
use crate::model::Document;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed document store. Holds the active catalog path; every load and
/// store goes through the full file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The active catalog path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty document at the active path if none exists yet.
    /// Idempotent: an existing file is left untouched.
    pub fn init(&self) -> Result<()> {
        if !self.path.exists() {
            write_document(&self.path, &Document::default())?;
        }
        Ok(())
    }

    /// Read a document from `path` and make it the active catalog. The
    /// document is re-written to that path on success, establishing it as
    /// the live store. On failure the active path is unchanged.
    pub fn open(&mut self, path: &Path) -> Result<Document> {
        let doc = read_document(path)?;
        self.path = path.to_path_buf();
        self.store(&doc)?;
        Ok(doc)
    }

    /// Write a copy of the active document to `path` without changing the
    /// active path.
    pub fn save_copy(&self, path: &Path) -> Result<()> {
        let doc = self.load()?;
        write_document(path, &doc)
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> Result<Document> {
        if !self.path.exists() {
            return Ok(Document::default());
        }
        read_document(&self.path)
    }

    fn store(&mut self, doc: &Document) -> Result<()> {
        write_document(&self.path, doc)
    }
}

fn read_document(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path).map_err(CurioError::Io)?;
    let doc: Document = serde_json::from_str(&content).map_err(CurioError::Parse)?;
    Ok(doc)
}

fn write_document(path: &Path, doc: &Document) -> Result<()> {
    let content = serde_json::to_string_pretty(doc).map_err(CurioError::Parse)?;
    fs::write(path, content).map_err(CurioError::Io)?;
    Ok(())
}
