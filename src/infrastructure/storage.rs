use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::domain::ports::KeyValueStorage;

// ── In-memory storage ────────────────────────────────────────────────────────

/// Key/value storage that lives and dies with the process. Used in tests and
/// in sessions that should not leave a login behind.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), io::Error> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

// ── File-backed storage ──────────────────────────────────────────────────────

/// Key/value storage persisted as a single JSON object on disk, so a session
/// survives process restarts the way browser local storage survives reloads.
pub struct FileStorage {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStorage {
    /// Load existing entries from `path`, starting empty if the file does not
    /// exist. An unreadable file is treated as empty rather than fatal.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("ignoring corrupt storage file {}: {}", path.display(), e);
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self { path, entries }
    }

    fn persist(&self) -> Result<(), io::Error> {
        let raw = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, raw)
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), io::Error> {
        self.entries.insert(key.to_string(), value);
        self.persist()
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            if let Err(e) = self.persist() {
                log::warn!("could not persist storage file {}: {}", self.path.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("laundry_backoffice_{}_{}", std::process::id(), name));
        path
    }

    #[test]
    fn memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("user"), None);

        storage.set("user", "{}".to_string()).unwrap();
        assert_eq!(storage.get("user").as_deref(), Some("{}"));

        storage.remove("user");
        assert_eq!(storage.get("user"), None);
    }

    #[test]
    fn file_storage_survives_reopen() {
        let path = scratch_file("reopen.json");
        let _ = fs::remove_file(&path);

        let mut storage = FileStorage::open(&path);
        storage.set("user", "{\"id\":1}".to_string()).unwrap();
        drop(storage);

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get("user").as_deref(), Some("{\"id\":1}"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn file_storage_ignores_corrupt_file() {
        let path = scratch_file("corrupt.json");
        fs::write(&path, "not json at all").unwrap();

        let storage = FileStorage::open(&path);
        assert_eq!(storage.get("user"), None);

        let _ = fs::remove_file(&path);
    }
}
