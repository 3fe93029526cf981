//! Progress state management
//!
//! Mirrors the stored progress record in a signal so badges and the home
//! page re-render when a module page records something.

use std::sync::Arc;

use dioxus::prelude::*;
use regresslab_domain::{ModuleId, ModuleProgress, ProgressRecord, PASS_THRESHOLD};

use crate::application::services::ProgressError;
use crate::presentation::services::UiProgressService;

#[derive(Clone)]
pub struct ProgressState {
    service: Arc<UiProgressService>,
    record: Signal<ProgressRecord>,
}

impl ProgressState {
    /// Read the stored record. Must run inside a Dioxus runtime.
    pub fn load(service: Arc<UiProgressService>) -> Self {
        let record = Signal::new(service.load());
        Self { service, record }
    }

    pub fn record(&self) -> Signal<ProgressRecord> {
        self.record
    }

    pub fn module(&self, module: &ModuleId) -> ModuleProgress {
        self.record.read().module_progress(module)
    }

    /// Safe to call from effects: the check does not subscribe to the record.
    pub fn mark_read(&mut self, module: &ModuleId) {
        if self.record.peek().module_progress(module).read {
            return;
        }
        let result = self.service.mark_read(module);
        self.apply(result);
    }

    pub fn mark_completed(&mut self, module: &ModuleId) {
        let result = self.service.mark_completed(module);
        self.apply(result);
    }

    /// Store a finished quiz; a passing score also completes the module.
    pub fn record_quiz(&mut self, module: &ModuleId, percentage: u8) {
        let result = self.service.record_quiz_score(module, percentage);
        self.apply(result);
        if percentage >= PASS_THRESHOLD {
            self.mark_completed(module);
        }
    }

    pub fn reset(&mut self) {
        let record = self.service.reset();
        self.record.set(record);
    }

    fn apply(&mut self, result: Result<ProgressRecord, ProgressError>) {
        match result {
            Ok(record) => self.record.set(record),
            Err(e) => tracing::error!(error = %e, "Failed to save progress"),
        }
    }
}
