//! Loading adventures by reference.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{FictionError, FictionResult};
use crate::scene::Adventure;

/// Something that can produce an adventure from a reference string.
///
/// Every failure, whether the data is unreachable or malformed, surfaces as
/// [`FictionError::LoadFailure`].
pub trait AdventureSource {
    /// Load and parse the adventure named by `reference`.
    fn load(&self, reference: &str) -> FictionResult<Adventure>;
}

fn load_failure(reference: &str, reason: impl ToString) -> FictionError {
    FictionError::LoadFailure {
        reference: reference.to_string(),
        reason: reason.to_string(),
    }
}

/// Adventures stored as JSON files; references are paths relative to a root.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Resolve references against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AdventureSource for DirectorySource {
    fn load(&self, reference: &str) -> FictionResult<Adventure> {
        let path = self.root.join(reference);
        let json = std::fs::read_to_string(&path).map_err(|e| load_failure(reference, e))?;
        let adventure = Adventure::from_json(&json).map_err(|e| load_failure(reference, e))?;
        tracing::debug!(reference, title = %adventure.title, scenes = adventure.scenes.len(), "adventure loaded");
        Ok(adventure)
    }
}

#[derive(Debug, Clone)]
enum Entry {
    Json(String),
    Parsed(Adventure),
}

/// Adventures held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: HashMap<String, Entry>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a JSON document, parsed on each load.
    pub fn with_json(mut self, reference: impl Into<String>, json: impl Into<String>) -> Self {
        self.entries.insert(reference.into(), Entry::Json(json.into()));
        self
    }

    /// Register an already built adventure.
    pub fn with_adventure(mut self, reference: impl Into<String>, adventure: Adventure) -> Self {
        self.entries
            .insert(reference.into(), Entry::Parsed(adventure));
        self
    }

    /// Drop a reference, making later loads fail.
    pub fn remove(&mut self, reference: &str) {
        self.entries.remove(reference);
    }
}

impl AdventureSource for MemorySource {
    fn load(&self, reference: &str) -> FictionResult<Adventure> {
        match self.entries.get(reference) {
            Some(Entry::Json(json)) => {
                Adventure::from_json(json).map_err(|e| load_failure(reference, e))
            }
            Some(Entry::Parsed(adventure)) => {
                adventure
                    .ensure_playable()
                    .map_err(|e| load_failure(reference, e))?;
                Ok(adventure.clone())
            }
            None => Err(load_failure(reference, "not found")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TINY: &str = r#"{ "title": "Tiny", "scenes": { "start": { "text": "Hi" } } }"#;

    #[test]
    fn directory_source_reads_relative_paths() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("adventures")).unwrap();
        std::fs::write(dir.path().join("adventures/tiny.json"), TINY).unwrap();

        let source = DirectorySource::new(dir.path());
        let adventure = source.load("adventures/tiny.json").unwrap();
        assert_eq!(adventure.title, "Tiny");
    }

    #[test]
    fn directory_source_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = DirectorySource::new(dir.path()).load("nope.json").unwrap_err();
        assert!(matches!(
            err,
            FictionError::LoadFailure { ref reference, .. } if reference == "nope.json"
        ));
    }

    #[test]
    fn directory_source_malformed_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("bad.json"), "{ \"scenes\": 4 }").unwrap();
        let err = DirectorySource::new(dir.path()).load("bad.json").unwrap_err();
        assert!(matches!(err, FictionError::LoadFailure { .. }));
    }

    #[test]
    fn memory_source() {
        let mut source = MemorySource::new()
            .with_json("tiny", TINY)
            .with_json("broken", "[]")
            .with_adventure("empty", Adventure::new("No start"));

        assert!(source.load("tiny").is_ok());
        assert!(source.load("broken").is_err());
        assert!(source.load("empty").is_err());
        assert!(source.load("missing").is_err());

        source.remove("tiny");
        assert!(source.load("tiny").is_err());
    }
}
