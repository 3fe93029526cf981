use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::scoring::FeedbackTier;

/// The seven scenario games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameKind {
    BiasVariance,
    Regularization,
    TrainTestSplit,
    CrossValidation,
    BayesianPrior,
    DataLeakage,
    PipelineOrder,
}

impl GameKind {
    pub const ALL: [GameKind; 7] = [
        Self::BiasVariance,
        Self::Regularization,
        Self::TrainTestSplit,
        Self::CrossValidation,
        Self::BayesianPrior,
        Self::DataLeakage,
        Self::PipelineOrder,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::BiasVariance => "bias-variance",
            Self::Regularization => "regularization",
            Self::TrainTestSplit => "train-test-split",
            Self::CrossValidation => "cross-validation",
            Self::BayesianPrior => "bayesian-prior",
            Self::DataLeakage => "data-leakage",
            Self::PipelineOrder => "pipeline-order",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::BiasVariance => "Model Doctor",
            Self::Regularization => "Lambda Tuner",
            Self::TrainTestSplit => "Split Decision",
            Self::CrossValidation => "Fold Finder",
            Self::BayesianPrior => "Prior Picker",
            Self::DataLeakage => "Leak Detective",
            Self::PipelineOrder => "Pipeline Builder",
        }
    }

    pub fn intro(&self) -> &'static str {
        match self {
            Self::BiasVariance => {
                "Each patient is a model with a training error and a test error. \
                 Diagnose it: underfitting, overfitting, or a healthy fit?"
            }
            Self::Regularization => {
                "Each model is misbehaving in its own way. Pick the regularization \
                 strength that brings its coefficients back in line."
            }
            Self::TrainTestSplit => {
                "How much data should you hold out? Pick the train/test ratio that \
                 suits each dataset size."
            }
            Self::CrossValidation => {
                "Choose how many folds to use given the dataset size and how long \
                 one model takes to train."
            }
            Self::BayesianPrior => {
                "Pick the prior that best encodes what you already know before \
                 the data arrives."
            }
            Self::DataLeakage => {
                "Every pipeline below hides one step that leaks information from \
                 the test set. Find it."
            }
            Self::PipelineOrder => {
                "Build a modelling pipeline one step at a time. What comes next?"
            }
        }
    }

    /// Number of scenario cards per play-through.
    pub fn rounds(&self) -> usize {
        match self {
            Self::PipelineOrder => 6,
            _ => 5,
        }
    }

    /// Whether rounds are drawn at random from the pool. The pipeline game
    /// walks its pool in order because each card builds on the last.
    pub fn shuffles(&self) -> bool {
        !matches!(self, Self::PipelineOrder)
    }

    pub fn feedback(&self, tier: FeedbackTier) -> &'static str {
        match (self, tier) {
            (Self::BiasVariance, FeedbackTier::Excellent) => {
                "You read learning curves like a pro. Gap between train and test \
                 error means variance; both high means bias."
            }
            (Self::BiasVariance, FeedbackTier::Good) => {
                "Solid diagnoses. Watch the gap between training and test error."
            }
            (Self::BiasVariance, FeedbackTier::NeedsReview) => {
                "Revisit the bias-variance lesson: compare training error to test \
                 error before deciding."
            }
            (Self::Regularization, FeedbackTier::Excellent) => {
                "Perfectly tuned. You know when to shrink and when to let the data speak."
            }
            (Self::Regularization, FeedbackTier::Good) => {
                "Nice tuning. Remember that too much lambda flattens every coefficient."
            }
            (Self::Regularization, FeedbackTier::NeedsReview) => {
                "Try again: overfitting calls for more penalty, underfitting for less."
            }
            (Self::TrainTestSplit, FeedbackTier::Excellent) => {
                "Great splits. Big datasets need only a small fraction for testing."
            }
            (Self::TrainTestSplit, FeedbackTier::Good) => {
                "Good instincts. The test set needs enough rows, not a fixed percentage."
            }
            (Self::TrainTestSplit, FeedbackTier::NeedsReview) => {
                "Review the evaluation module: small data needs a bigger share for \
                 testing, huge data a smaller one."
            }
            (Self::CrossValidation, FeedbackTier::Excellent) => {
                "Fold mastery! You balanced variance of the estimate against compute."
            }
            (Self::CrossValidation, FeedbackTier::Good) => {
                "Good choices. More folds cost more fits."
            }
            (Self::CrossValidation, FeedbackTier::NeedsReview) => {
                "Revisit cross-validation: tiny datasets favour many folds, expensive \
                 models favour few."
            }
            (Self::BayesianPrior, FeedbackTier::Excellent) => {
                "Thoroughly Bayesian. Your priors say exactly what you know."
            }
            (Self::BayesianPrior, FeedbackTier::Good) => {
                "Good priors. Strong beliefs deserve narrow priors, vague ones wide priors."
            }
            (Self::BayesianPrior, FeedbackTier::NeedsReview) => {
                "Review Bayesian regression: the prior should match the strength of \
                 your knowledge."
            }
            (Self::DataLeakage, FeedbackTier::Excellent) => {
                "Sharp eyes. No leak gets past you."
            }
            (Self::DataLeakage, FeedbackTier::Good) => {
                "Good detective work. Anything fitted on the full dataset is suspect."
            }
            (Self::DataLeakage, FeedbackTier::NeedsReview) => {
                "Look again: fit every transformation on the training split only."
            }
            (Self::PipelineOrder, FeedbackTier::Excellent) => {
                "Textbook pipeline. Split first, fit on train, evaluate once."
            }
            (Self::PipelineOrder, FeedbackTier::Good) => {
                "Almost there. Keep the test set untouched until the very end."
            }
            (Self::PipelineOrder, FeedbackTier::NeedsReview) => {
                "Revisit the pipeline lesson and try building it again."
            }
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for GameKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == slug)
            .ok_or_else(|| DomainError::parse(format!("Unknown game: {}", slug)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_through_from_str() {
        for kind in GameKind::ALL {
            assert_eq!(kind.slug().parse::<GameKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_slug_is_a_parse_error() {
        assert!(matches!(
            "tic-tac-toe".parse::<GameKind>(),
            Err(DomainError::Parse(_))
        ));
    }

    #[test]
    fn only_pipeline_game_keeps_pool_order() {
        assert!(!GameKind::PipelineOrder.shuffles());
        assert!(GameKind::DataLeakage.shuffles());
    }
}
