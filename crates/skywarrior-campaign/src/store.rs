//! Key-value persistence.
//!
//! The simulation's collaborators read and write progress and settings
//! through a string-keyed store holding JSON-encoded values. A
//! file-backed implementation is provided for the application and an
//! in-memory one for tests.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Persistence failure. Callers that load through `progress` or
/// `settings` swallow these into built-in defaults.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access store file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode store value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String-keyed store of JSON-encoded values.
pub trait KeyValueStore {
    /// Read the raw value for a key, if present.
    fn get(&self, key: &str) -> Option<String>;
    /// Write the raw value for a key.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// File-backed store: one JSON file per key inside a directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

impl AsRef<Path> for FileStore {
    fn as_ref(&self) -> &Path {
        &self.dir
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
