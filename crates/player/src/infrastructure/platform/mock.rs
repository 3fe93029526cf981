//! In-memory platform for tests and headless tooling
//!
//! Storage lives in a shared map, randomness replays a fixed sequence, and
//! sleeping returns immediately.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use std::{future::Future, pin::Pin};

use crate::ports::outbound::platform::{
    DocumentProvider, RandomProvider, SleepProvider, StorageProvider,
};
use crate::state::Platform;

#[derive(Clone, Default)]
pub struct MemoryStorageProvider {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl StorageProvider for MemoryStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values.read().ok().and_then(|v| v.get(key).cloned())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.write() {
            values.remove(key);
        }
    }
}

/// Replays `values`, each reduced modulo the requested bound.
#[derive(Clone, Default)]
pub struct FixedRandomProvider {
    values: Arc<Vec<usize>>,
    cursor: Arc<Mutex<usize>>,
}

impl FixedRandomProvider {
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values: Arc::new(values),
            cursor: Arc::new(Mutex::new(0)),
        }
    }
}

impl RandomProvider for FixedRandomProvider {
    fn random_index(&self, bound: usize) -> usize {
        if self.values.is_empty() || bound == 0 {
            return 0;
        }
        let Ok(mut cursor) = self.cursor.lock() else {
            return 0;
        };
        let value = self.values[*cursor % self.values.len()];
        *cursor += 1;
        value % bound
    }
}

#[derive(Clone, Default)]
pub struct HeadlessDocumentProvider;

impl DocumentProvider for HeadlessDocumentProvider {
    fn set_page_title(&self, title: &str) {
        tracing::debug!(title, "Page title");
    }
}

#[derive(Clone, Default)]
pub struct InstantSleepProvider;

impl SleepProvider for InstantSleepProvider {
    fn sleep_ms(&self, _ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async {})
    }
}

/// Platform with empty in-memory storage and an all-zero random sequence.
pub fn create_memory_platform() -> Platform {
    create_memory_platform_with(MemoryStorageProvider::default(), vec![0])
}

pub fn create_memory_platform_with(storage: MemoryStorageProvider, random: Vec<usize>) -> Platform {
    Platform::new(
        InstantSleepProvider,
        FixedRandomProvider::new(random),
        storage,
        HeadlessDocumentProvider,
    )
}
