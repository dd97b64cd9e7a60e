//! Backing-store abstractions.
//!
//! The engine reads a whole text blob from a [`TextSource`] and writes a
//! whole text blob to a [`TextSink`], overwriting what was there. No locking
//! is done: when two documents are saved to the same store, the last writer
//! wins.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Supplies the full text to parse.
pub trait TextSource {
    fn read_text(&self) -> Result<String, IoError>;
}

/// Accepts the full serialized text, replacing prior content.
pub trait TextSink {
    fn write_text(&self, text: &str) -> Result<(), IoError>;
}

/// A store backed by a single file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for FileStore {
    fn read_text(&self) -> Result<String, IoError> {
        read_file(&self.path)
    }
}

impl TextSink for FileStore {
    fn write_text(&self, text: &str) -> Result<(), IoError> {
        write_file(&self.path, text)
    }
}

/// An in-memory store, for callers that already hold the text.
#[derive(Debug, Default)]
pub struct MemoryStore {
    text: RefCell<String>,
}

impl MemoryStore {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: RefCell::new(text.into()),
        }
    }

    /// Current content of the store.
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

impl TextSource for MemoryStore {
    fn read_text(&self) -> Result<String, IoError> {
        Ok(self.text())
    }
}

impl TextSink for MemoryStore {
    fn write_text(&self, text: &str) -> Result<(), IoError> {
        text.clone_into(&mut self.text.borrow_mut());
        Ok(())
    }
}

/// Read a file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    let write_error = |source| IoError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    fs::write(path, content).map_err(write_error)
}
