//! Quiz flow state machine
//!
//! `ShowingQuestion` → (select) → `ShowingExplanation` → (acknowledge) →
//! next question, or `Complete` after the last one. Only the running count
//! of correct answers is kept.

use serde::{Deserialize, Serialize};

use crate::content::{Quiz, QuizQuestion};
use crate::error::DomainError;
use crate::scoring::{passed, percentage};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum QuizPhase {
    ShowingQuestion,
    ShowingExplanation { selected: String, correct: bool },
    Complete,
}

#[derive(Debug, Clone)]
pub struct QuizFlow {
    quiz: Quiz,
    index: usize,
    correct_count: usize,
    phase: QuizPhase,
}

impl QuizFlow {
    pub fn new(quiz: Quiz) -> Result<Self, DomainError> {
        quiz.validate()?;
        Ok(Self {
            quiz,
            index: 0,
            correct_count: 0,
            phase: QuizPhase::ShowingQuestion,
        })
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    /// Zero-based index of the question on screen.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.quiz.questions.len()
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn current(&self) -> Option<&QuizQuestion> {
        match self.phase {
            QuizPhase::Complete => None,
            _ => self.quiz.questions.get(self.index),
        }
    }

    pub fn is_last_question(&self) -> bool {
        self.index + 1 >= self.total()
    }

    /// Lock in an answer. Scores a point iff the id matches the answer key.
    pub fn select(&mut self, option_id: &str) -> Result<bool, DomainError> {
        if self.phase != QuizPhase::ShowingQuestion {
            return Err(DomainError::invalid_state_transition(
                "answer already selected for this question",
            ));
        }
        let question = self
            .quiz
            .questions
            .get(self.index)
            .ok_or_else(|| DomainError::invalid_state_transition("no question to answer"))?;
        if question.option(option_id).is_none() {
            return Err(DomainError::validation(format!(
                "question {} has no option '{}'",
                self.index + 1,
                option_id
            )));
        }

        let correct = question.is_correct(option_id);
        if correct {
            self.correct_count += 1;
        }
        self.phase = QuizPhase::ShowingExplanation {
            selected: option_id.to_string(),
            correct,
        };
        Ok(correct)
    }

    /// Dismiss the explanation and move on.
    pub fn acknowledge(&mut self) -> Result<(), DomainError> {
        if !matches!(self.phase, QuizPhase::ShowingExplanation { .. }) {
            return Err(DomainError::invalid_state_transition(
                "nothing to acknowledge",
            ));
        }
        if self.is_last_question() {
            self.phase = QuizPhase::Complete;
        } else {
            self.index += 1;
            self.phase = QuizPhase::ShowingQuestion;
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.phase == QuizPhase::Complete
    }

    pub fn percentage(&self) -> u8 {
        percentage(self.correct_count, self.total())
    }

    pub fn passed(&self) -> bool {
        passed(self.percentage())
    }

    pub fn restart(&mut self) {
        self.index = 0;
        self.correct_count = 0;
        self.phase = QuizPhase::ShowingQuestion;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::QuizOption;
    use crate::ids::ModuleId;

    fn question(correct: &str) -> QuizQuestion {
        QuizQuestion {
            question: "Which line fits best?".into(),
            options: vec![
                QuizOption::new("a", "The one with the smallest squared error"),
                QuizOption::new("b", "The steepest one"),
                QuizOption::new("c", "The one through the origin"),
            ],
            correct: correct.into(),
            explanation: "Least squares minimises the sum of squared residuals.".into(),
        }
    }

    fn flow(n: usize) -> QuizFlow {
        QuizFlow::new(Quiz {
            module: ModuleId::new("module-1"),
            questions: (0..n).map(|_| question("a")).collect(),
        })
        .unwrap()
    }

    #[test]
    fn correct_selection_increments_by_exactly_one() {
        let mut quiz = flow(3);
        assert!(quiz.select("a").unwrap());
        assert_eq!(quiz.correct_count(), 1);
    }

    #[test]
    fn incorrect_selection_does_not_score() {
        let mut quiz = flow(3);
        assert!(!quiz.select("b").unwrap());
        assert_eq!(quiz.correct_count(), 0);
        assert_eq!(
            quiz.phase(),
            &QuizPhase::ShowingExplanation {
                selected: "b".into(),
                correct: false
            }
        );
    }

    #[test]
    fn answer_is_locked_after_first_selection() {
        let mut quiz = flow(3);
        quiz.select("b").unwrap();
        assert!(quiz.select("a").is_err());
        assert_eq!(quiz.correct_count(), 0);
    }

    #[test]
    fn unknown_option_is_rejected_without_locking() {
        let mut quiz = flow(2);
        assert!(matches!(quiz.select("z"), Err(DomainError::Validation(_))));
        assert_eq!(quiz.phase(), &QuizPhase::ShowingQuestion);
    }

    #[test]
    fn acknowledge_requires_an_answer() {
        let mut quiz = flow(2);
        assert!(quiz.acknowledge().is_err());
    }

    #[test]
    fn last_acknowledge_completes_the_quiz() {
        let mut quiz = flow(2);
        quiz.select("a").unwrap();
        quiz.acknowledge().unwrap();
        assert_eq!(quiz.index(), 1);
        quiz.select("c").unwrap();
        quiz.acknowledge().unwrap();
        assert!(quiz.is_complete());
        assert!(quiz.current().is_none());
        assert_eq!(quiz.percentage(), 50);
        assert!(!quiz.passed());
    }

    #[test]
    fn pass_message_at_exactly_sixty_percent() {
        let mut quiz = flow(5);
        for answer in ["a", "a", "a", "b", "b"] {
            quiz.select(answer).unwrap();
            quiz.acknowledge().unwrap();
        }
        assert_eq!(quiz.percentage(), 60);
        assert!(quiz.passed());
    }

    #[test]
    fn percentage_is_rounded() {
        let mut quiz = flow(3);
        for answer in ["a", "a", "b"] {
            quiz.select(answer).unwrap();
            quiz.acknowledge().unwrap();
        }
        assert_eq!(quiz.percentage(), 67);
    }

    #[test]
    fn restart_resets_counters_and_position() {
        let mut quiz = flow(2);
        quiz.select("a").unwrap();
        quiz.acknowledge().unwrap();
        quiz.restart();
        assert_eq!(quiz.index(), 0);
        assert_eq!(quiz.correct_count(), 0);
        assert_eq!(quiz.phase(), &QuizPhase::ShowingQuestion);
    }
}
