use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::ModuleId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
}

impl QuizOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A single multiple-choice question with its answer key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<QuizOption>,
    /// Id of the correct option
    pub correct: String,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn is_correct(&self, option_id: &str) -> bool {
        self.correct == option_id
    }

    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.option(&self.correct)
    }
}

/// Ordered question list for one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub module: ModuleId,
    pub questions: Vec<QuizQuestion>,
}

impl Quiz {
    /// Check the answer key against the options it refers to.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.questions.is_empty() {
            return Err(DomainError::validation(format!(
                "quiz for {} has no questions",
                self.module
            )));
        }
        for (i, q) in self.questions.iter().enumerate() {
            if q.options.len() < 2 {
                return Err(DomainError::validation(format!(
                    "{} question {} needs at least two options",
                    self.module,
                    i + 1
                )));
            }
            if q.correct_option().is_none() {
                return Err(DomainError::validation(format!(
                    "{} question {} marks unknown option '{}' as correct",
                    self.module,
                    i + 1,
                    q.correct
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: &str) -> QuizQuestion {
        QuizQuestion {
            question: "What does MSE average?".into(),
            options: vec![
                QuizOption::new("a", "Absolute errors"),
                QuizOption::new("b", "Squared errors"),
            ],
            correct: correct.into(),
            explanation: "Mean squared error averages squared residuals.".into(),
        }
    }

    #[test]
    fn validate_accepts_consistent_key() {
        let quiz = Quiz {
            module: ModuleId::new("module-1"),
            questions: vec![question("b")],
        };
        assert!(quiz.validate().is_ok());
    }

    #[test]
    fn validate_rejects_dangling_correct_id() {
        let quiz = Quiz {
            module: ModuleId::new("module-1"),
            questions: vec![question("z")],
        };
        assert!(matches!(quiz.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn validate_rejects_empty_quiz() {
        let quiz = Quiz {
            module: ModuleId::new("module-1"),
            questions: vec![],
        };
        assert!(quiz.validate().is_err());
    }
}
