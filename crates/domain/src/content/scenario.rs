use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::games::GameKind;

/// Penalty used by a regularization scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyKind {
    Ridge,
    Lasso,
}

/// Game-specific numbers that feed the scenario card and its visualization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScenarioParams {
    BiasVariance {
        train_error: f64,
        test_error: f64,
    },
    Regularization {
        penalty: PenaltyKind,
        /// Unregularized coefficient magnitudes
        coefficients: Vec<f64>,
    },
    TrainTestSplit {
        data_size: u64,
    },
    CrossValidation {
        data_size: u64,
        /// Seconds one model fit takes
        fit_seconds: f64,
    },
    BayesianPrior {
        prior_mean: f64,
        sample_mean: f64,
        observations: u32,
    },
    DataLeakage {
        steps: Vec<String>,
    },
    PipelineOrder {
        completed: Vec<String>,
    },
}

impl ScenarioParams {
    pub fn game(&self) -> GameKind {
        match self {
            Self::BiasVariance { .. } => GameKind::BiasVariance,
            Self::Regularization { .. } => GameKind::Regularization,
            Self::TrainTestSplit { .. } => GameKind::TrainTestSplit,
            Self::CrossValidation { .. } => GameKind::CrossValidation,
            Self::BayesianPrior { .. } => GameKind::BayesianPrior,
            Self::DataLeakage { .. } => GameKind::DataLeakage,
            Self::PipelineOrder { .. } => GameKind::PipelineOrder,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioChoice {
    pub id: String,
    pub label: String,
    /// Numeric reading of the choice (lambda, train fraction, k, prior
    /// strength) used by the visualization
    #[serde(default)]
    pub value: Option<f64>,
}

impl ScenarioChoice {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: None,
        }
    }

    pub fn valued(id: impl Into<String>, label: impl Into<String>, value: f64) -> Self {
        Self {
            value: Some(value),
            ..Self::new(id, label)
        }
    }
}

/// One scenario card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub prompt: String,
    pub params: ScenarioParams,
    pub choices: Vec<ScenarioChoice>,
    /// Id of the correct choice
    pub correct: String,
    pub explanation: String,
}

impl Scenario {
    pub fn is_correct(&self, choice_id: &str) -> bool {
        self.correct == choice_id
    }

    pub fn choice(&self, choice_id: &str) -> Option<&ScenarioChoice> {
        self.choices.iter().find(|c| c.id == choice_id)
    }
}

/// The full static pool a game draws its rounds from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPool {
    pub game: GameKind,
    pub scenarios: Vec<Scenario>,
}

impl ScenarioPool {
    pub fn validate(&self) -> Result<(), DomainError> {
        let rounds = self.game.rounds();
        if self.scenarios.len() < rounds {
            return Err(DomainError::validation(format!(
                "{} pool has {} scenarios but plays {} rounds",
                self.game,
                self.scenarios.len(),
                rounds
            )));
        }
        for scenario in &self.scenarios {
            if scenario.params.game() != self.game {
                return Err(DomainError::validation(format!(
                    "scenario {} belongs to {} but sits in the {} pool",
                    scenario.id,
                    scenario.params.game(),
                    self.game
                )));
            }
            if scenario.choice(&scenario.correct).is_none() {
                return Err(DomainError::validation(format!(
                    "scenario {} marks unknown choice '{}' as correct",
                    scenario.id, scenario.correct
                )));
            }
        }
        Ok(())
    }
}
