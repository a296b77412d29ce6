// SPDX-License-Identifier: MPL-2.0
//! Preference store adapters implementing the [`PreferenceStore`] port.
//!
//! - [`JsonFileStore`]: one JSON object on disk, keyed by string
//! - [`MemoryStore`]: process-local map, for tests and hosts without disk
//!
//! [`PreferenceStore`]: crate::application::port::PreferenceStore

use crate::app::paths;
use crate::application::port::{PreferenceStore, StorageError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Store file name within the app data directory.
const STORE_FILE: &str = "preferences.json";

/// Why the store file could not be read.
#[derive(Debug)]
enum ReadError {
    /// The file exists but reading it failed.
    Io(StorageError),
    /// The file was read but does not hold a JSON object of strings.
    Corrupt(String),
}

impl From<ReadError> for StorageError {
    fn from(err: ReadError) -> Self {
        match err {
            ReadError::Io(err) => err,
            ReadError::Corrupt(msg) => StorageError::Io(msg),
        }
    }
}

/// File-backed store holding a flat `{ key: value }` JSON object.
///
/// Reads go to disk every time so that several processes sharing the data
/// directory observe each other's writes. Writes are serialized within the
/// process; across processes the last write wins.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Store at an explicit file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Store in the application data directory.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if no data directory can be
    /// determined on this platform.
    pub fn open_default() -> Result<Self, StorageError> {
        Self::open_in(None)
    }

    /// Store in `base_dir`, or the application data directory when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if no directory can be resolved.
    pub fn open_in(base_dir: Option<PathBuf>) -> Result<Self, StorageError> {
        let mut dir = paths::get_app_data_dir_with_override(base_dir).ok_or_else(|| {
            StorageError::Unavailable("no application data directory".to_string())
        })?;
        dir.push(STORE_FILE);
        Ok(Self::new(dir))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, ReadError> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(ReadError::Io(e.into())),
        };
        if content.trim_ascii().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_slice(&content).map_err(|e| {
            ReadError::Corrupt(format!("corrupt store {}: {e}", self.path.display()))
        })
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        // A corrupt file is replaced rather than blocking every future write.
        // Any other read failure aborts so the other keys survive.
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(ReadError::Corrupt(msg)) => {
                tracing::warn!(%msg, "replacing corrupt preference store");
                BTreeMap::new()
            }
            Err(err) => return Err(err.into()),
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content =
            serde_json::to_string_pretty(&entries).map_err(|e| StorageError::Io(e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| {
            if e.kind() == std::io::ErrorKind::StorageFull {
                StorageError::QuotaExceeded
            } else {
                StorageError::from(e)
            }
        })
    }
}

/// In-memory store. Contents live as long as the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempdir().expect("temp dir");
        let store = JsonFileStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.get("anything").expect("read"), None);
    }

    #[test]
    fn set_then_get_round_trips_and_creates_parent() {
        let dir = tempdir().expect("temp dir");
        let store = JsonFileStore::new(dir.path().join("nested").join("prefs.json"));

        store.set("a", "1").expect("write a");
        store.set("b", "2").expect("write b");
        store.set("a", "3").expect("overwrite a");

        assert_eq!(store.get("a").expect("read"), Some("3".to_string()));
        assert_eq!(store.get("b").expect("read"), Some("2".to_string()));
    }

    #[test]
    fn corrupt_file_errors_on_read_but_is_replaced_on_write() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{not json").expect("seed corrupt file");
        let store = JsonFileStore::new(&path);

        assert!(store.get("a").is_err());
        store.set("a", "1").expect("write over corrupt file");
        assert_eq!(store.get("a").expect("read"), Some("1".to_string()));
    }

    #[test]
    fn unreadable_store_is_an_io_error_not_corruption() {
        let dir = tempdir().expect("temp dir");
        // A directory where the file should be cannot be read as a file.
        let store = JsonFileStore::new(dir.path());

        assert!(matches!(store.read_all(), Err(ReadError::Io(_))));
        assert!(matches!(store.set("a", "1"), Err(StorageError::Io(_))));
        assert!(dir.path().is_dir());
    }

    #[test]
    fn corrupt_bytes_are_classified_as_corrupt() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("prefs.json");
        fs::write(&path, [0xFF, 0xFE, 0x00]).expect("seed binary file");

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.read_all(), Err(ReadError::Corrupt(_))));
    }

    #[test]
    fn blank_file_reads_as_empty() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("prefs.json");
        fs::write(&path, "  \n").expect("seed blank file");

        let store = JsonFileStore::new(&path);
        assert_eq!(store.get("a").expect("read"), None);
    }

    #[test]
    fn open_in_uses_store_file_name() {
        let dir = tempdir().expect("temp dir");
        let store = JsonFileStore::open_in(Some(dir.path().to_path_buf())).expect("open");
        assert_eq!(store.path(), dir.path().join(STORE_FILE));
    }

    #[test]
    fn memory_store_is_last_write_wins() {
        let store = MemoryStore::new();
        store.set("k", "first").expect("write");
        store.set("k", "second").expect("write");
        assert_eq!(store.get("k").expect("read"), Some("second".to_string()));
    }
}
