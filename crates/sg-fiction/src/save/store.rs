//! Single-slot storage for save payloads.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a save store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure.
    #[error("storage error: {0}")]
    Io(#[from] io::Error),

    /// The store refused the write.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// One named slot holding an opaque payload.
pub trait SaveStore {
    /// Read the payload, `None` if the slot is empty.
    fn read(&self) -> StoreResult<Option<String>>;

    /// Replace the payload.
    fn write(&mut self, payload: &str) -> StoreResult<()>;

    /// Empty the slot. Clearing an empty slot is not an error.
    fn clear(&mut self) -> StoreResult<()>;
}

impl<S: SaveStore + ?Sized> SaveStore for &mut S {
    fn read(&self) -> StoreResult<Option<String>> {
        (**self).read()
    }

    fn write(&mut self, payload: &str) -> StoreResult<()> {
        (**self).write(payload)
    }

    fn clear(&mut self) -> StoreResult<()> {
        (**self).clear()
    }
}

/// An in-memory slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl MemoryStore {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot that already holds a payload.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: Some(payload.into()),
        }
    }
}

impl SaveStore for MemoryStore {
    fn read(&self) -> StoreResult<Option<String>> {
        Ok(self.slot.clone())
    }

    fn write(&mut self, payload: &str) -> StoreResult<()> {
        self.slot = Some(payload.to_string());
        Ok(())
    }

    fn clear(&mut self) -> StoreResult<()> {
        self.slot = None;
        Ok(())
    }
}

/// A slot backed by one file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Use the file at `path` as the slot.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveStore for FileStore {
    fn read(&self) -> StoreResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, payload: &str) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, payload)?;
        Ok(())
    }

    fn clear(&mut self) -> StoreResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
