#![forbid(unsafe_code)]

//! Durable client storage for the handful of flags the app persists.
//!
//! The app persists exactly two string keys: the authentication marker and
//! the theme preference. This module provides that surface as a small
//! key-value store with two backends:
//!
//! - [`MemoryStore`]: in-memory (tests, ephemeral runs)
//! - [`FileStore`]: a JSON file, written with the write-then-rename pattern
//!
//! # Design Invariants
//!
//! 1. Storage failures never panic; operations return `Result`.
//! 2. Saves are atomic: a torn write cannot corrupt previously saved state.
//! 3. A missing or corrupt file degrades to an empty store on load.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Key under which the authentication marker is stored.
pub const KEY_AUTHENTICATED: &str = "authenticated";
/// Key under which the theme preference is stored.
pub const KEY_THEME: &str = "theme";

/// Errors that can occur during storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// I/O error during file operations.
    Io(io::Error),
    /// Serialization or deserialization error.
    Serialization(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "I/O error: {e}"),
            StorageError::Serialization(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Serialization(_) => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        StorageError::Io(e)
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// String key-value store with the semantics of browser local storage.
///
/// Implementations persist eagerly: `set` and `remove` make the change
/// durable before returning.
pub trait KeyValueStore {
    /// Read a key. Returns `None` when the key has never been set.
    fn get(&self, key: &str) -> Option<&str>;

    /// Set a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove a key. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// JSON-file-backed store.
///
/// The whole map is rewritten on every mutation; with two keys that is
/// cheaper than any incremental scheme would be.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Open a store at `path`, loading existing entries.
    ///
    /// A missing file yields an empty store. A corrupt file is logged and
    /// also yields an empty store; it will be overwritten on the next save.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::load(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load state file, starting empty");
                HashMap::new()
            }
        };
        Self { path, entries }
    }

    fn load(path: &Path) -> StorageResult<HashMap<String, String>> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&data).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    fn save(&self) -> StorageResult<()> {
        let data = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        // Write-then-rename so a torn write cannot clobber the old file.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.save()
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        if self.entries.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(KEY_THEME), None);
        store.set(KEY_THEME, "dark").unwrap();
        assert_eq!(store.get(KEY_THEME), Some("dark"));
        store.remove(KEY_THEME).unwrap();
        assert_eq!(store.get(KEY_THEME), None);
    }

    #[test]
    fn memory_store_remove_absent_is_noop() {
        let mut store = MemoryStore::new();
        store.remove("nope").unwrap();
    }

    #[test]
    fn file_store_persists_across_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = FileStore::open(&path);
        store.set(KEY_AUTHENTICATED, "true").unwrap();
        store.set(KEY_THEME, "light").unwrap();
        drop(store);

        let store = FileStore::open(&path);
        assert_eq!(store.get(KEY_AUTHENTICATED), Some("true"));
        assert_eq!(store.get(KEY_THEME), Some("light"));
    }

    #[test]
    fn file_store_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = FileStore::open(&path);
        store.set(KEY_AUTHENTICATED, "true").unwrap();
        store.remove(KEY_AUTHENTICATED).unwrap();
        drop(store);

        let store = FileStore::open(&path);
        assert_eq!(store.get(KEY_AUTHENTICATED), None);
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("never-written.json"));
        assert_eq!(store.get(KEY_THEME), None);
    }

    #[test]
    fn file_store_corrupt_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json at all {").unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get(KEY_THEME), None);

        // The next save overwrites the corrupt file cleanly.
        store.set(KEY_THEME, "dark").unwrap();
        let reloaded = FileStore::open(&path);
        assert_eq!(reloaded.get(KEY_THEME), Some("dark"));
    }

    #[test]
    fn file_store_no_tmp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let mut store = FileStore::open(&path);
        store.set(KEY_THEME, "dark").unwrap();
        assert!(!path.with_extension("tmp").exists());
    }
}
