//! Score percentages and feedback bands shared by quizzes and games.

use serde::{Deserialize, Serialize};

/// Minimum percentage that counts as a pass.
pub const PASS_THRESHOLD: u8 = 60;

/// Lower bound of the top feedback band.
pub const EXCELLENT_THRESHOLD: u8 = 80;

/// `round(correct / total * 100)`, or 0 for an empty attempt.
pub fn percentage(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total);
    ((correct as f64 / total as f64) * 100.0).round() as u8
}

pub fn passed(percent: u8) -> bool {
    percent >= PASS_THRESHOLD
}

/// Feedback band keyed by the 60% and 80% thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    NeedsReview,
    Good,
    Excellent,
}

impl FeedbackTier {
    pub fn from_percentage(percent: u8) -> Self {
        if percent >= EXCELLENT_THRESHOLD {
            Self::Excellent
        } else if percent >= PASS_THRESHOLD {
            Self::Good
        } else {
            Self::NeedsReview
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent work!",
            Self::Good => "Good job!",
            Self::NeedsReview => "Keep practicing!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(5, 5), 100);
    }

    #[test]
    fn empty_attempt_is_zero() {
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn pass_boundary_is_inclusive() {
        assert!(passed(60));
        assert!(!passed(59));
        assert_eq!(percentage(3, 5), 60);
        assert!(passed(percentage(3, 5)));
    }

    #[test]
    fn tiers_follow_thresholds() {
        assert_eq!(FeedbackTier::from_percentage(59), FeedbackTier::NeedsReview);
        assert_eq!(FeedbackTier::from_percentage(60), FeedbackTier::Good);
        assert_eq!(FeedbackTier::from_percentage(79), FeedbackTier::Good);
        assert_eq!(FeedbackTier::from_percentage(80), FeedbackTier::Excellent);
    }
}
