//! Progress service - reads and writes the learner's progress record
//!
//! The record lives under a single storage key as JSON. Every call reads the
//! current value, applies one change and writes it straight back; there is
//! no cached copy that could go stale between pages.

use std::sync::Arc;

use regresslab_domain::{ModuleId, ModuleProgress, ProgressRecord};
use thiserror::Error;

use crate::ports::outbound::{storage_keys, KeyValueStorePort};

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("Failed to encode progress record: {0}")]
    Encode(#[from] serde_json::Error),
}

pub struct ProgressService<S: KeyValueStorePort + ?Sized> {
    store: Arc<S>,
}

impl<S: KeyValueStorePort + ?Sized> Clone for ProgressService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KeyValueStorePort + ?Sized> ProgressService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Current record; missing or unreadable data yields an empty record.
    pub fn load(&self) -> ProgressRecord {
        let Some(raw) = self.store.get(storage_keys::PROGRESS) else {
            return ProgressRecord::default();
        };
        match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "Stored progress is unreadable; starting fresh");
                ProgressRecord::default()
            }
        }
    }

    fn save(&self, record: &ProgressRecord) -> Result<(), ProgressError> {
        let json = serde_json::to_string(record)?;
        self.store.set(storage_keys::PROGRESS, &json);
        Ok(())
    }

    /// Apply `change`; write back only when it reports a difference.
    fn update(
        &self,
        change: impl FnOnce(&mut ProgressRecord) -> bool,
    ) -> Result<ProgressRecord, ProgressError> {
        let mut record = self.load();
        if change(&mut record) {
            self.save(&record)?;
        }
        Ok(record)
    }

    pub fn mark_read(&self, module: &ModuleId) -> Result<ProgressRecord, ProgressError> {
        self.update(|record| record.mark_read(module))
    }

    pub fn mark_completed(&self, module: &ModuleId) -> Result<ProgressRecord, ProgressError> {
        let record = self.update(|record| record.mark_completed(module))?;
        tracing::info!(module = %module, "Module completed");
        Ok(record)
    }

    pub fn record_quiz_score(
        &self,
        module: &ModuleId,
        score: u8,
    ) -> Result<ProgressRecord, ProgressError> {
        let record = self.update(|record| {
            record.record_quiz_score(module, score);
            true
        })?;
        tracing::info!(module = %module, score, "Quiz score recorded");
        Ok(record)
    }

    pub fn module_progress(&self, module: &ModuleId) -> ModuleProgress {
        self.load().module_progress(module)
    }

    /// Forget everything.
    pub fn reset(&self) -> ProgressRecord {
        self.store.remove(storage_keys::PROGRESS);
        tracing::info!("Progress reset");
        ProgressRecord::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::create_memory_platform;
    use crate::ports::outbound::{MockKeyValueStorePort, PlatformPort};
    use mockall::predicate::eq;
    use std::sync::Mutex;

    fn module(slug: &str) -> ModuleId {
        ModuleId::new(slug)
    }

    #[test]
    fn missing_record_loads_as_empty() {
        let mut store = MockKeyValueStorePort::new();
        store
            .expect_get()
            .with(eq(storage_keys::PROGRESS))
            .returning(|_| None);

        let service = ProgressService::new(Arc::new(store));
        assert_eq!(service.load(), ProgressRecord::default());
    }

    #[test]
    fn corrupt_record_loads_as_empty() {
        let mut store = MockKeyValueStorePort::new();
        store
            .expect_get()
            .returning(|_| Some("{not json".to_string()));

        let service = ProgressService::new(Arc::new(store));
        assert_eq!(service.load().completed_count(), 0);
    }

    #[test]
    fn completing_writes_the_record_immediately() {
        let written = Arc::new(Mutex::new(None::<String>));
        let sink = Arc::clone(&written);

        let mut store = MockKeyValueStorePort::new();
        store.expect_get().returning(|_| None);
        store
            .expect_set()
            .with(eq(storage_keys::PROGRESS), mockall::predicate::always())
            .times(1)
            .returning(move |_, value| {
                *sink.lock().unwrap() = Some(value.to_string());
            });

        let service = ProgressService::new(Arc::new(store));
        service.mark_completed(&module("module-2")).unwrap();

        let json = written.lock().unwrap().clone().unwrap();
        let record: ProgressRecord = serde_json::from_str(&json).unwrap();
        assert!(record.module_progress(&module("module-2")).completed);
        assert!(record.module_progress(&module("module-2")).read);
    }

    #[test]
    fn reading_twice_writes_once() {
        let stored = Arc::new(Mutex::new(None::<String>));
        let reader = Arc::clone(&stored);
        let writer = Arc::clone(&stored);

        let mut store = MockKeyValueStorePort::new();
        store
            .expect_get()
            .returning(move |_| reader.lock().unwrap().clone());
        store
            .expect_set()
            .times(1)
            .returning(move |_, value| {
                *writer.lock().unwrap() = Some(value.to_string());
            });

        let service = ProgressService::new(Arc::new(store));
        service.mark_read(&module("module-1")).unwrap();
        service.mark_read(&module("module-1")).unwrap();
    }

    #[test]
    fn progress_round_trips_through_platform_storage() {
        let platform: Arc<dyn PlatformPort> = Arc::new(create_memory_platform());
        let service = ProgressService::new(Arc::clone(&platform));

        service.mark_completed(&module("module-3")).unwrap();
        service.record_quiz_score(&module("module-4"), 75).unwrap();

        // A fresh service over the same storage sees the same record
        let reopened = ProgressService::new(platform);
        assert!(reopened.module_progress(&module("module-3")).completed);
        assert_eq!(
            reopened.module_progress(&module("module-4")).quiz_score,
            Some(75)
        );
        assert_eq!(reopened.module_progress(&module("module-5")).quiz_score, None);
    }

    #[test]
    fn reset_clears_stored_progress() {
        let platform: Arc<dyn PlatformPort> = Arc::new(create_memory_platform());
        let service = ProgressService::new(Arc::clone(&platform));

        service.mark_completed(&module("module-1")).unwrap();
        service.reset();

        assert_eq!(platform.storage_load(storage_keys::PROGRESS), None);
        assert_eq!(service.load().completed_count(), 0);
    }
}
