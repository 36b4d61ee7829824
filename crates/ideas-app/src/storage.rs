//! Key-value storage backends for persisted state
//!
//! Favorites are written as a whole under a single key. The file backend maps
//! each key to `<dir>/<key>.json`; the memory backend keeps values for the
//! lifetime of the process only.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use ideas_core::prelude::*;

/// String key-value storage, read and replaced one whole value at a time.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store: one JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Sidecar file locked while `key` is being written
    pub fn lock_path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!(".{}.lock", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            Error::storage(format!(
                "Failed to create {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let path = self.path_for(key);
        let temp_path = self.dir.join(format!(".{}.json.tmp", key));

        // Writers serialize on the sidecar lock, then write temp and rename
        let lock_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(self.lock_path_for(key))
            .map_err(|e| Error::storage(format!("Failed to open lock file: {}", e)))?;
        lock_file
            .lock_exclusive()
            .map_err(|e| Error::storage(format!("Failed to lock {}: {}", key, e)))?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| Error::storage(format!("Failed to open temp file: {}", e)))?;

        file.write_all(value.as_bytes())
            .map_err(|e| Error::storage(format!("Failed to write {}: {}", key, e)))?;
        file.flush()
            .map_err(|e| Error::storage(format!("Failed to flush {}: {}", key, e)))?;

        std::fs::rename(&temp_path, &path).map_err(|e| {
            Error::storage(format!(
                "Failed to move temp file to {}: {}",
                path.display(),
                e
            ))
        })?;

        drop(file);
        if let Err(e) = FileExt::unlock(&lock_file) {
            debug!("Failed to unlock {}: {}", key, e);
        }

        debug!("Wrote {} bytes to {:?}", value.len(), path);
        Ok(())
    }
}

/// In-memory store, used for ephemeral sessions and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, as if it had been written by an earlier session
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
