//! Drag-and-drop ordering exercise
//!
//! Blocks are shuffled on load; the learner reorders them by dragging one
//! block onto another position. Submission checks exact sequence equality
//! and reports per-position correctness for highlighting.

use serde::{Deserialize, Serialize};

use crate::content::exercise::validate_ordering;
use crate::content::CodeBlock;
use crate::error::DomainError;
use crate::random::{shuffle, RandomSource};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingResult {
    pub is_correct: bool,
    /// `per_position[i]` is true when the block at `i` is the expected one
    pub per_position: Vec<bool>,
}

impl OrderingResult {
    pub fn correct_positions(&self) -> usize {
        self.per_position.iter().filter(|ok| **ok).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingExercise {
    blocks: Vec<CodeBlock>,
    correct_order: Vec<String>,
    order: Vec<String>,
    dragging: Option<usize>,
    result: Option<OrderingResult>,
}

impl OrderingExercise {
    pub fn new(
        blocks: Vec<CodeBlock>,
        correct_order: Vec<String>,
        rng: &mut impl RandomSource,
    ) -> Result<Self, DomainError> {
        validate_ordering(&blocks, &correct_order).map_err(DomainError::validation)?;
        let mut exercise = Self {
            order: blocks.iter().map(|b| b.id.clone()).collect(),
            blocks,
            correct_order,
            dragging: None,
            result: None,
        };
        shuffle(&mut exercise.order, rng);
        Ok(exercise)
    }

    /// Current arrangement as block ids.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn correct_order(&self) -> &[String] {
        &self.correct_order
    }

    /// Current arrangement as blocks.
    pub fn arranged_blocks(&self) -> Vec<&CodeBlock> {
        self.order
            .iter()
            .filter_map(|id| self.blocks.iter().find(|b| &b.id == id))
            .collect()
    }

    pub fn dragging(&self) -> Option<usize> {
        self.dragging
    }

    pub fn result(&self) -> Option<&OrderingResult> {
        self.result.as_ref()
    }

    pub fn is_submitted(&self) -> bool {
        self.result.is_some()
    }

    fn check_index(&self, index: usize) -> Result<(), DomainError> {
        if index >= self.order.len() {
            return Err(DomainError::validation(format!(
                "position {} is outside {} blocks",
                index,
                self.order.len()
            )));
        }
        Ok(())
    }

    /// Record the source position of a drag gesture.
    pub fn drag_start(&mut self, index: usize) -> Result<(), DomainError> {
        self.check_index(index)?;
        self.dragging = Some(index);
        Ok(())
    }

    pub fn drag_cancel(&mut self) {
        self.dragging = None;
    }

    /// Drop the dragged block at `target`. Returns false when no drag was active.
    pub fn drop_on(&mut self, target: usize) -> Result<bool, DomainError> {
        let Some(source) = self.dragging.take() else {
            return Ok(false);
        };
        self.move_block(source, target)?;
        Ok(true)
    }

    /// Splice the block at `from` out and reinsert it at `to`.
    pub fn move_block(&mut self, from: usize, to: usize) -> Result<(), DomainError> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from != to {
            let id = self.order.remove(from);
            self.order.insert(to, id);
            // Any earlier verdict no longer describes the arrangement.
            self.result = None;
        }
        Ok(())
    }

    pub fn submit(&mut self) -> &OrderingResult {
        let per_position: Vec<bool> = self
            .order
            .iter()
            .zip(&self.correct_order)
            .map(|(got, want)| got == want)
            .collect();
        let result = OrderingResult {
            is_correct: self.order == self.correct_order,
            per_position,
        };
        self.result.insert(result)
    }

    /// Reshuffle and forget the previous submission.
    pub fn reset(&mut self, rng: &mut impl RandomSource) {
        self.order = self.blocks.iter().map(|b| b.id.clone()).collect();
        shuffle(&mut self.order, rng);
        self.dragging = None;
        self.result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;

    fn blocks() -> Vec<CodeBlock> {
        vec![
            CodeBlock::new("import", "Import libraries", "import numpy as np"),
            CodeBlock::new("data", "Create data", "X = np.arange(10)"),
            CodeBlock::new("fit", "Fit model", "w = np.polyfit(X, y, 1)"),
            CodeBlock::new("predict", "Predict", "y_hat = np.polyval(w, X)"),
        ]
    }

    fn correct() -> Vec<String> {
        ["import", "data", "fit", "predict"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn unshuffled() -> OrderingExercise {
        OrderingExercise::new(blocks(), correct(), &mut SequenceRandom::identity()).unwrap()
    }

    #[test]
    fn exact_correct_order_is_correct() {
        let mut ex = unshuffled();
        let result = ex.submit().clone();
        assert!(result.is_correct);
        assert_eq!(result.per_position, vec![true; 4]);
    }

    #[test]
    fn any_differing_position_is_incorrect() {
        let mut ex = unshuffled();
        ex.move_block(3, 2).unwrap();
        let result = ex.submit().clone();
        assert!(!result.is_correct);
        assert_eq!(result.per_position, vec![true, true, false, false]);
        assert_eq!(result.correct_positions(), 2);
    }

    #[test]
    fn drag_then_drop_splices_and_reinserts() {
        let mut ex = unshuffled();
        ex.drag_start(0).unwrap();
        assert!(ex.drop_on(2).unwrap());
        assert_eq!(ex.order(), &["data", "fit", "import", "predict"]);
        assert!(ex.dragging().is_none());
    }

    #[test]
    fn drop_without_drag_is_a_no_op() {
        let mut ex = unshuffled();
        assert!(!ex.drop_on(1).unwrap());
        assert_eq!(ex.order(), correct().as_slice());
    }

    #[test]
    fn out_of_range_indexes_are_rejected() {
        let mut ex = unshuffled();
        assert!(ex.drag_start(4).is_err());
        assert!(ex.move_block(0, 9).is_err());
    }

    #[test]
    fn moving_after_submit_clears_the_verdict() {
        let mut ex = unshuffled();
        ex.submit();
        ex.move_block(0, 1).unwrap();
        assert!(!ex.is_submitted());
    }

    #[test]
    fn shuffle_on_load_keeps_the_block_multiset() {
        for seed in 0..10usize {
            let ex =
                OrderingExercise::new(blocks(), correct(), &mut SequenceRandom::new(vec![seed, 3]))
                    .unwrap();
            let mut ids = ex.order().to_vec();
            ids.sort();
            let mut expected = correct();
            expected.sort();
            assert_eq!(ids, expected);
        }
    }

    #[test]
    fn reset_reshuffles_and_clears_submission() {
        let mut ex = unshuffled();
        ex.drag_start(1).unwrap();
        ex.submit();
        ex.reset(&mut SequenceRandom::new(vec![0]));
        assert!(!ex.is_submitted());
        assert!(ex.dragging().is_none());
        assert_eq!(ex.order(), &["data", "fit", "predict", "import"]);
    }

    #[test]
    fn mismatched_answer_key_is_rejected() {
        let mut key = correct();
        key.pop();
        assert!(OrderingExercise::new(blocks(), key, &mut SequenceRandom::identity()).is_err());
    }
}
