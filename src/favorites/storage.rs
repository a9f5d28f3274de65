// ABOUTME: Key/value storage backends for durable client state
// ABOUTME: File-per-key directory backend and a shared in-memory backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use crate::constants::storage::FILE_EXTENSION;
use crate::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Minimal string key/value store
pub trait KeyValueStorage: Send + Sync {
    /// Read the value under `key`, `None` when nothing was stored
    ///
    /// # Errors
    ///
    /// Returns a storage error when the backend cannot be read
    fn read(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the value under `key`
    ///
    /// # Errors
    ///
    /// Returns a storage error when the backend cannot be written
    fn write(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete `key`; deleting a missing key succeeds
    ///
    /// # Errors
    ///
    /// Returns a storage error when the backend cannot be written
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `root`; the directory is created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the key files
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
            && !key.starts_with('.');
        if !valid {
            return Err(AppError::invalid_input(format!("Invalid storage key '{key}'")));
        }
        Ok(self.root.join(format!("{key}.{FILE_EXTENSION}")))
    }
}

impl KeyValueStorage for FileStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!("Failed to read {}", path.display()))
                .with_source(e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).map_err(|e| {
            AppError::storage(format!("Failed to create {}", self.root.display())).with_source(e)
        })?;

        // Write then rename so readers never see a truncated file
        let staging = path.with_extension(format!("{FILE_EXTENSION}.tmp"));
        fs::write(&staging, value).map_err(|e| {
            AppError::storage(format!("Failed to write {}", staging.display())).with_source(e)
        })?;
        fs::rename(&staging, &path).map_err(|e| {
            AppError::storage(format!("Failed to replace {}", path.display())).with_source(e)
        })?;

        debug!(path = %path.display(), bytes = value.len(), "Stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!("Failed to remove {}", path.display()))
                .with_source(e)),
        }
    }
}

/// In-memory storage; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Empty storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<T>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> T) -> AppResult<T> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| AppError::internal("Memory storage lock poisoned"))?;
        Ok(f(&mut entries))
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        self.with_entries(|entries| entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        self.with_entries(|entries| {
            entries.insert(key.to_owned(), value.to_owned());
        })
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.with_entries(|entries| {
            entries.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_rejects_path_like_keys() {
        let storage = FileStorage::new("/tmp/unused");
        assert!(storage.read("../secrets").is_err());
        assert!(storage.read("").is_err());
    }

    #[test]
    fn test_memory_storage_clones_share_entries() {
        let storage = MemoryStorage::new();
        let clone = storage.clone();
        storage.write("k", "v").unwrap();
        assert_eq!(clone.read("k").unwrap().as_deref(), Some("v"));
        clone.remove("k").unwrap();
        assert_eq!(storage.read("k").unwrap(), None);
    }
}
