use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::ExerciseId;

/// An explanation card shown before the ordering exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeStep {
    pub title: String,
    pub explanation: String,
    pub code: String,
}

/// A draggable labelled code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub id: String,
    pub label: String,
    pub code: String,
}

impl CodeBlock {
    pub fn new(id: impl Into<String>, label: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            code: code.into(),
        }
    }
}

/// Everything the code lab modal needs for one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExercise {
    pub id: ExerciseId,
    pub title: String,
    pub steps: Vec<CodeStep>,
    pub blocks: Vec<CodeBlock>,
    pub correct_order: Vec<String>,
    /// Full listing shown (and runnable) in the playground
    pub playground_code: String,
}

impl CodeExercise {
    pub fn block(&self, id: &str) -> Option<&CodeBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// The correct order must be a permutation of the block ids.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.steps.is_empty() {
            return Err(DomainError::validation(format!(
                "exercise {} has no explanation steps",
                self.id
            )));
        }
        validate_ordering(&self.blocks, &self.correct_order)
            .map_err(|e| DomainError::validation(format!("exercise {}: {}", self.id, e)))
    }
}

/// Shared by exercises and the ordering state machine.
pub(crate) fn validate_ordering(blocks: &[CodeBlock], correct: &[String]) -> Result<(), String> {
    if blocks.is_empty() {
        return Err("no blocks".to_string());
    }
    if blocks.len() != correct.len() {
        return Err(format!(
            "{} blocks but correct order lists {}",
            blocks.len(),
            correct.len()
        ));
    }
    let mut ids = HashSet::new();
    for block in blocks {
        if !ids.insert(block.id.as_str()) {
            return Err(format!("duplicate block id '{}'", block.id));
        }
    }
    let mut seen = HashSet::new();
    for id in correct {
        if !ids.contains(id.as_str()) {
            return Err(format!("correct order references unknown block '{}'", id));
        }
        if !seen.insert(id.as_str()) {
            return Err(format!("correct order repeats block '{}'", id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks() -> Vec<CodeBlock> {
        vec![
            CodeBlock::new("import", "Import", "import numpy as np"),
            CodeBlock::new("fit", "Fit", "model.fit(X, y)"),
        ]
    }

    #[test]
    fn ordering_must_cover_every_block_once() {
        assert!(validate_ordering(&blocks(), &["import".into(), "fit".into()]).is_ok());
        assert!(validate_ordering(&blocks(), &["import".into(), "import".into()]).is_err());
        assert!(validate_ordering(&blocks(), &["import".into()]).is_err());
        assert!(validate_ordering(&blocks(), &["import".into(), "plot".into()]).is_err());
    }
}
