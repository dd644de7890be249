//! Local key-value storage.
//!
//! The browser localStorage analog: a tiny string-to-string store used
//! only for theme persistence. The trait keeps the theme store testable
//! and lets the host pick a backend; the file backend keeps a single
//! JSON object on disk.

use std::collections::HashMap;
use std::path::PathBuf;

use parking_lot::Mutex;

/// Errors from the storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the backing store failed.
    #[error("storage I/O error: {0}")]
    Io(String),

    /// The backing store contents are not the expected format.
    #[error("storage format error: {0}")]
    Format(String),
}

/// A string key-value store.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value for `key`, if present.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage. The default backend; state dies with the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// File-backed storage holding one JSON object of string entries.
///
/// Writes are read-modify-write under a lock; a missing file reads as
/// an empty store.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    /// Create a store backed by the file at `path`.
    ///
    /// The file is created on first write; the parent directory must
    /// already exist.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read_entries(&self) -> Result<HashMap<String, String>, StorageError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };
        serde_json::from_str(&contents).map_err(|e| StorageError::Format(e.to_string()))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock();
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock();
        let mut entries = self.read_entries()?;
        entries.insert(key.to_owned(), value.to_owned());
        let payload = serde_json::to_string_pretty(&entries)
            .map_err(|e| StorageError::Format(e.to_string()))?;
        std::fs::write(&self.path, payload).map_err(|e| StorageError::Io(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("austoc-storage-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_memory_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("theme").unwrap(), None);

        storage.set("theme", "luxury").unwrap();
        assert_eq!(storage.get("theme").unwrap(), Some("luxury".to_owned()));

        storage.set("theme", "dark").unwrap();
        assert_eq!(storage.get("theme").unwrap(), Some("dark".to_owned()));
    }

    #[test]
    fn test_file_missing_reads_empty() {
        let storage = FileStorage::new(temp_path());
        assert_eq!(storage.get("theme").unwrap(), None);
    }

    #[test]
    fn test_file_roundtrip_across_instances() {
        let path = temp_path();

        let storage = FileStorage::new(&path);
        storage.set("theme", "light").unwrap();

        // A second instance over the same path sees the value.
        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get("theme").unwrap(), Some("light".to_owned()));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_preserves_other_keys() {
        let path = temp_path();
        let storage = FileStorage::new(&path);

        storage.set("theme", "dark").unwrap();
        storage.set("locale", "en").unwrap();
        assert_eq!(storage.get("theme").unwrap(), Some("dark".to_owned()));
        assert_eq!(storage.get("locale").unwrap(), Some("en".to_owned()));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_garbage_is_format_error() {
        let path = temp_path();
        std::fs::write(&path, "not json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(
            storage.get("theme"),
            Err(StorageError::Format(_))
        ));

        std::fs::remove_file(&path).unwrap();
    }
}
