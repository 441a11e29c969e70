//! Desktop platform implementations
//!
//! Storage is a JSON file of string pairs, standing in for the browser's
//! localStorage. The clock reads the system time.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use directories::ProjectDirs;

use crate::ports::outbound::{ClockPort, StoragePort};

/// System time clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// File-backed key/value storage
///
/// By default values live in a JSON file at:
/// - Linux: ~/.config/lineup/storage.json
/// - macOS: ~/Library/Application Support/io.lineup.lineup/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\lineup\lineup\storage.json
#[derive(Clone)]
pub struct FileStorage {
    storage_path: PathBuf,
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStorage {
    /// Storage in the platform config directory.
    pub fn new() -> Self {
        let storage_path = if let Some(dirs) = ProjectDirs::from("io", "lineup", "lineup") {
            dirs.config_dir().join("storage.json")
        } else {
            PathBuf::from("lineup_storage.json")
        };
        Self::at(storage_path)
    }

    /// Storage in an explicit file, loading what is already there.
    pub fn at(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();
        let cache = load_file(&storage_path);
        tracing::debug!(path = ?storage_path, entries = cache.len(), "File storage initialized");

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    fn persist(&self) {
        if let Some(parent) = self.storage_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!("Failed to create storage directory: {}", e);
                return;
            }
        }

        let cache = match self.cache.read() {
            Ok(guard) => guard,
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                return;
            }
        };

        match serde_json::to_string_pretty(&*cache) {
            Ok(data) => {
                if let Err(e) = fs::write(&self.storage_path, data) {
                    tracing::error!("Failed to write storage file: {}", e);
                }
            }
            Err(e) => {
                tracing::error!("Failed to serialize storage data: {}", e);
            }
        }
    }
}

fn load_file(path: &Path) -> HashMap<String, String> {
    if !path.exists() {
        return HashMap::new();
    }
    match fs::read_to_string(path) {
        Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse storage file: {}", e);
            HashMap::new()
        }),
        Err(e) => {
            tracing::warn!("Failed to read storage file: {}", e);
            HashMap::new()
        }
    }
}

impl StoragePort for FileStorage {
    fn save(&self, key: &str, value: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::storage_keys;
    use tempfile::TempDir;

    #[test]
    fn values_survive_a_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let key = storage_keys::tutorial_shown("away");

        FileStorage::at(&path).save(&key, "true");
        let reloaded = FileStorage::at(&path);

        assert_eq!(reloaded.load(&key).as_deref(), Some("true"));
        assert_eq!(reloaded.load("lineup_tutorial_shown_home"), None);
    }

    #[test]
    fn later_save_overwrites_on_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        let storage = FileStorage::at(&path);
        storage.save("a", "1");
        storage.save("b", "2");

        storage.save("a", "3");

        let reloaded = FileStorage::at(&path);
        assert_eq!(reloaded.load("a").as_deref(), Some("3"));
        assert_eq!(reloaded.load("b").as_deref(), Some("2"));
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{not json").unwrap();

        let storage = FileStorage::at(&path);

        assert_eq!(storage.load("anything"), None);
        storage.save("k", "v");
        assert_eq!(FileStorage::at(&path).load("k").as_deref(), Some("v"));
    }

    #[test]
    fn system_clock_is_current() {
        let before = Utc::now();
        let now = SystemClock.now();
        assert!(now >= before);
    }
}
