//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates all platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in infrastructure/platform/desktop.rs or wasm.rs
//!   (or `create_memory_platform()` in tests)
//! - Injected into Dioxus context by the runner as `Arc<dyn PlatformPort>`
//! - Accessed in UI via `use_platform()`

use std::{future::Future, pin::Pin, sync::Arc};

use crate::ports::outbound::{
    DocumentProvider, PlatformPort, RandomProvider, SleepProvider, StorageProvider,
};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    sleep: Arc<dyn SleepProviderDyn>,
    random: Arc<dyn RandomProviderDyn>,
    storage: Arc<dyn StorageProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait SleepProviderDyn: Send + Sync {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

trait RandomProviderDyn: Send + Sync {
    fn random_index(&self, bound: usize) -> usize;
}

trait StorageProviderDyn: Send + Sync {
    fn save(&self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: SleepProvider + Send + Sync> SleepProviderDyn for T {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        SleepProvider::sleep_ms(self, ms)
    }
}

impl<T: RandomProvider + Send + Sync> RandomProviderDyn for T {
    fn random_index(&self, bound: usize) -> usize {
        RandomProvider::random_index(self, bound)
    }
}

impl<T: StorageProvider + Send + Sync> StorageProviderDyn for T {
    fn save(&self, key: &str, value: &str) {
        StorageProvider::save(self, key, value)
    }
    fn load(&self, key: &str) -> Option<String> {
        StorageProvider::load(self, key)
    }
    fn remove(&self, key: &str) {
        StorageProvider::remove(self, key)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<Sl, R, S, D>(sleep: Sl, random: R, storage: S, document: D) -> Self
    where
        Sl: SleepProvider + Send + Sync,
        R: RandomProvider + Send + Sync,
        S: StorageProvider + Send + Sync,
        D: DocumentProvider + Send + Sync,
    {
        Self {
            sleep: Arc::new(sleep),
            random: Arc::new(random),
            storage: Arc::new(storage),
            document: Arc::new(document),
        }
    }
}

// =============================================================================
// PlatformPort implementation - lets the UI depend on the trait only
// =============================================================================

impl PlatformPort for Platform {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        self.sleep.sleep_ms(ms)
    }

    fn random_index(&self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        self.random.random_index(bound)
    }

    fn storage_save(&self, key: &str, value: &str) {
        self.storage.save(key, value)
    }

    fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    fn storage_remove(&self, key: &str) {
        self.storage.remove(key)
    }

    fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::create_memory_platform;

    #[test]
    fn storage_calls_reach_the_provider() {
        let platform = create_memory_platform();
        platform.storage_save("k", "v");
        assert_eq!(platform.storage_load("k").as_deref(), Some("v"));
        platform.storage_remove("k");
        assert_eq!(platform.storage_load("k"), None);
    }

    #[derive(Clone, Default)]
    struct RecordingDocument(Arc<std::sync::Mutex<Vec<String>>>);

    impl DocumentProvider for RecordingDocument {
        fn set_page_title(&self, title: &str) {
            if let Ok(mut titles) = self.0.lock() {
                titles.push(title.to_string());
            }
        }
    }

    #[test]
    fn page_title_reaches_the_document_provider() {
        use crate::infrastructure::platform::mock::{FixedRandomProvider, MemoryStorageProvider};

        let document = RecordingDocument::default();
        let platform = Platform::new(
            crate::infrastructure::platform::mock::InstantSleepProvider,
            FixedRandomProvider::new(vec![0]),
            MemoryStorageProvider::default(),
            document.clone(),
        );

        platform.set_page_title("Glossary | RegressLab");
        assert_eq!(
            document.0.lock().unwrap().as_slice(),
            ["Glossary | RegressLab".to_string()]
        );
    }

    #[test]
    fn degenerate_bounds_never_reach_the_provider() {
        let platform = create_memory_platform();
        assert_eq!(platform.random_index(0), 0);
        assert_eq!(platform.random_index(1), 0);
    }
}
