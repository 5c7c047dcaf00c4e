//! Storage backends for the persisted settings blob
//!
//! Persistence is best-effort by contract: a backend that cannot read returns
//! `None`, a backend that cannot write logs and moves on. Nothing here ever
//! surfaces an error to the simulation.

use std::cell::RefCell;
use std::path::PathBuf;

/// A client-scoped blob store. One opaque text payload, read and written
/// whole, the shape of web local storage.
pub trait SettingsStorage {
    /// The stored blob, or `None` when storage is absent, unreadable, or empty
    fn read(&self) -> Option<String>;

    /// Overwrite the stored blob. Must not panic on failure.
    fn write(&self, blob: &str);

    /// Delete the stored blob entirely
    fn clear(&self);
}

/// File-backed storage: the whole blob lives in a single settings file
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SettingsStorage for FileStorage {
    fn read(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Some(text),
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    log::debug!("settings file {} unreadable: {err}", self.path.display());
                }
                None
            }
        }
    }

    fn write(&self, blob: &str) {
        if let Err(err) = std::fs::write(&self.path, blob) {
            log::warn!("failed to write settings file {}: {err}", self.path.display());
        }
    }

    fn clear(&self) {
        if let Err(err) = std::fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                log::warn!("failed to remove settings file {}: {err}", self.path.display());
            }
        }
    }
}

/// In-memory storage for tests and hosts without a persistence layer
#[derive(Default)]
pub struct MemoryStorage {
    cell: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded storage, as if a previous session had persisted `blob`
    pub fn with_contents(blob: &str) -> Self {
        Self {
            cell: RefCell::new(Some(blob.to_string())),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.cell.borrow().clone()
    }
}

impl SettingsStorage for MemoryStorage {
    fn read(&self) -> Option<String> {
        self.cell.borrow().clone()
    }

    fn write(&self, blob: &str) {
        *self.cell.borrow_mut() = Some(blob.to_string());
    }

    fn clear(&self) {
        *self.cell.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read(), None);

        storage.write("a = 1");
        assert_eq!(storage.read().as_deref(), Some("a = 1"));

        storage.clear();
        assert_eq!(storage.read(), None);
    }

    #[test]
    fn file_round_trip() {
        let dir = std::env::temp_dir().join("drift_storage_test");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("settings.toml");

        let storage = FileStorage::new(&path);
        storage.clear();
        assert_eq!(storage.read(), None);

        storage.write("[noise]\nscale = 0.01\n");
        let read = storage.read().expect("read back");
        assert!(read.contains("scale"));

        storage.clear();
        assert_eq!(storage.read(), None);
    }

    #[test]
    fn file_missing_is_none_not_error() {
        let storage = FileStorage::new("/nonexistent/dir/settings.toml");
        assert_eq!(storage.read(), None);
        // Writes to an unwritable location must not panic
        storage.write("x = 1");
        storage.clear();
    }
}
