//! TOML file parameter store (std only).

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ParameterSnapshot;
use crate::error::{message, StorageError};

use super::store::ParameterStore;

/// Stores the parameter snapshot as a TOML document on disk.
///
/// Intended for host-side simulation and for Linux-class boards.
#[derive(Debug, Clone)]
pub struct TomlFileStore {
    path: PathBuf,
}

impl TomlFileStore {
    /// Store backed by `path`; the file is created on first persist.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ParameterStore for TomlFileStore {
    fn load(&mut self) -> Result<ParameterSnapshot, StorageError> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| StorageError::Io(message(&e.to_string())))?;

        toml::from_str(&content).map_err(|e| StorageError::Parse(message(e.message())))
    }

    fn persist(&mut self, snapshot: &ParameterSnapshot) -> Result<(), StorageError> {
        let content = toml::to_string(snapshot)
            .map_err(|e| StorageError::Serialize(message(&e.to_string())))?;

        fs::write(&self.path, content).map_err(|e| StorageError::Io(message(&e.to_string())))
    }
}
