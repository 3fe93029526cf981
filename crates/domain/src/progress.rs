//! Learner progress record
//!
//! A plain value object: which modules were read, which were completed, and
//! the last quiz score per module. Persistence is handled by the player,
//! which serializes this record to local key-value storage.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::ids::ModuleId;
use crate::scoring::percentage;

/// Progress view for a single module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModuleProgress {
    pub read: bool,
    pub completed: bool,
    /// Last quiz percentage, absent until a quiz is finished
    pub quiz_score: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(default)]
    pub read: BTreeSet<ModuleId>,
    #[serde(default)]
    pub completed: BTreeSet<ModuleId>,
    #[serde(default)]
    pub quiz_scores: BTreeMap<ModuleId, u8>,
}

impl ProgressRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the record changed.
    pub fn mark_read(&mut self, module: &ModuleId) -> bool {
        self.read.insert(module.clone())
    }

    /// Completing a module implies it was read.
    pub fn mark_completed(&mut self, module: &ModuleId) -> bool {
        let newly_read = self.read.insert(module.clone());
        let newly_completed = self.completed.insert(module.clone());
        newly_read || newly_completed
    }

    /// Store the latest quiz percentage, capped at 100.
    pub fn record_quiz_score(&mut self, module: &ModuleId, score: u8) {
        self.quiz_scores.insert(module.clone(), score.min(100));
    }

    pub fn module_progress(&self, module: &ModuleId) -> ModuleProgress {
        ModuleProgress {
            read: self.read.contains(module),
            completed: self.completed.contains(module),
            quiz_score: self.quiz_scores.get(module).copied(),
        }
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Share of the course's modules that are completed.
    pub fn completion_percentage(&self, modules: &[ModuleId]) -> u8 {
        let done = modules
            .iter()
            .filter(|m| self.completed.contains(*m))
            .count();
        percentage(done, modules.len())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(n: u8) -> ModuleId {
        ModuleId::new(format!("module-{n}"))
    }

    #[test]
    fn untouched_module_has_empty_progress() {
        let record = ProgressRecord::new();
        assert_eq!(record.module_progress(&module(1)), ModuleProgress::default());
    }

    #[test]
    fn completing_marks_read_too() {
        let mut record = ProgressRecord::new();
        assert!(record.mark_completed(&module(2)));
        let progress = record.module_progress(&module(2));
        assert!(progress.read);
        assert!(progress.completed);
        assert!(!record.mark_completed(&module(2)));
    }

    #[test]
    fn quiz_score_is_reported_back() {
        let mut record = ProgressRecord::new();
        record.record_quiz_score(&module(3), 75);
        assert_eq!(record.module_progress(&module(3)).quiz_score, Some(75));
        record.record_quiz_score(&module(3), 40);
        assert_eq!(record.module_progress(&module(3)).quiz_score, Some(40));
    }

    #[test]
    fn quiz_score_is_capped() {
        let mut record = ProgressRecord::new();
        record.record_quiz_score(&module(1), 180);
        assert_eq!(record.module_progress(&module(1)).quiz_score, Some(100));
    }

    #[test]
    fn completion_percentage_counts_course_modules_only() {
        let mut record = ProgressRecord::new();
        record.mark_completed(&module(1));
        record.mark_completed(&ModuleId::new("retired-module"));
        let course = vec![module(1), module(2), module(3)];
        assert_eq!(record.completion_percentage(&course), 33);
    }

    #[test]
    fn json_round_trip_preserves_record() {
        let mut record = ProgressRecord::new();
        record.mark_read(&module(1));
        record.mark_completed(&module(2));
        record.record_quiz_score(&module(2), 75);

        let json = serde_json::to_string(&record).unwrap();
        let back: ProgressRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        assert_eq!(back.module_progress(&module(2)).quiz_score, Some(75));
    }

    #[test]
    fn missing_fields_default_when_decoding() {
        let record: ProgressRecord = serde_json::from_str(r#"{"read":["module-1"]}"#).unwrap();
        assert!(record.module_progress(&module(1)).read);
        assert!(record.completed.is_empty());
    }
}
