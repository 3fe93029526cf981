//! Desktop platform implementations
//!
//! Provides platform-specific implementations for desktop using
//! standard library and native crates.

use crate::ports::outbound::platform::{
    DocumentProvider, RandomProvider, SleepProvider, StorageProvider,
};
use crate::state::Platform;
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;
use std::{future::Future, pin::Pin, sync::Arc};

use super::SeededRandomProvider;

/// Desktop random provider using rand crate
#[derive(Clone, Default)]
pub struct DesktopRandomProvider;

impl RandomProvider for DesktopRandomProvider {
    fn random_index(&self, bound: usize) -> usize {
        use rand::Rng;
        if bound <= 1 {
            return 0;
        }
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Desktop storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file at:
/// - Linux: ~/.config/regresslab/storage.json
/// - macOS: ~/Library/Application Support/io.regresslab.course/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\regresslab\course\config\storage.json
#[derive(Clone)]
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorageProvider {
    /// Create a storage provider in the platform config directory
    pub fn new() -> Self {
        let storage_path = if let Some(dirs) = ProjectDirs::from("io", "regresslab", "course") {
            dirs.config_dir().join("storage.json")
        } else {
            // Fallback to current directory if project dirs unavailable
            PathBuf::from("regresslab_storage.json")
        };
        Self::at(storage_path)
    }

    /// Create a storage provider backed by an explicit file
    ///
    /// Loads existing data from the file if it exists.
    pub fn at(storage_path: PathBuf) -> Self {
        let cache = if storage_path.exists() {
            match fs::read_to_string(&storage_path) {
                Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!("Failed to parse storage file: {}", e);
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read storage file: {}", e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!("Desktop storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Persist the cache to disk
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

impl StorageProvider for DesktopStorageProvider {
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

    fn remove(&self, key: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.remove(key);
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }
}

/// Desktop document provider (no-op for page title)
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, _title: &str) {
        // No-op on desktop - window title is managed by Dioxus desktop
    }
}

/// Desktop sleep provider using tokio timer
#[derive(Clone, Default)]
pub struct DesktopSleepProvider;

impl SleepProvider for DesktopSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        })
    }
}

/// Create platform services for desktop
///
/// A seed swaps the thread RNG for a reproducible one.
pub fn create_platform(seed: Option<u64>) -> Platform {
    match seed {
        Some(seed) => Platform::new(
            DesktopSleepProvider,
            SeededRandomProvider::new(seed),
            DesktopStorageProvider::new(),
            DesktopDocumentProvider,
        ),
        None => Platform::new(
            DesktopSleepProvider,
            DesktopRandomProvider,
            DesktopStorageProvider::new(),
            DesktopDocumentProvider,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_survives_a_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let first = DesktopStorageProvider::at(path.clone());
        first.save("regresslab_progress", "{\"read\":[\"module-1\"]}");

        let second = DesktopStorageProvider::at(path);
        assert_eq!(
            second.load("regresslab_progress").as_deref(),
            Some("{\"read\":[\"module-1\"]}")
        );
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let storage = DesktopStorageProvider::at(path);
        assert_eq!(storage.load("anything"), None);
    }

    #[test]
    fn remove_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let storage = DesktopStorageProvider::at(path.clone());
        storage.save("k", "v");
        storage.remove("k");
        assert_eq!(DesktopStorageProvider::at(path).load("k"), None);
    }

    #[test]
    fn random_index_stays_in_bounds() {
        let rng = DesktopRandomProvider;
        for _ in 0..100 {
            assert!(rng.random_index(3) < 3);
        }
        assert_eq!(rng.random_index(0), 0);
    }
}
