use serde::{Deserialize, Serialize};

use crate::content::{Scenario, ScenarioPool};
use crate::error::DomainError;
use crate::random::{sample, RandomSource};
use crate::scoring::{percentage, FeedbackTier};

use super::GameKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    Intro,
    Playing,
    Results,
}

/// What happened on one scenario card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub scenario_id: String,
    pub selected: String,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResults {
    pub score: usize,
    pub total: usize,
    pub percentage: u8,
    pub tier: FeedbackTier,
    pub feedback: &'static str,
}

/// Intro → scenario cards → results, shared by every game.
#[derive(Debug, Clone)]
pub struct ScenarioGame {
    kind: GameKind,
    pool: Vec<Scenario>,
    rounds: Vec<Scenario>,
    phase: GamePhase,
    round: usize,
    selected: Option<String>,
    score: usize,
    outcomes: Vec<RoundOutcome>,
}

impl ScenarioGame {
    pub fn new(pool: ScenarioPool) -> Result<Self, DomainError> {
        pool.validate()?;
        Ok(Self {
            kind: pool.game,
            pool: pool.scenarios,
            rounds: Vec::new(),
            phase: GamePhase::Intro,
            round: 0,
            selected: None,
            score: 0,
            outcomes: Vec::new(),
        })
    }

    pub fn kind(&self) -> GameKind {
        self.kind
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Zero-based index of the card on screen.
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn total_rounds(&self) -> usize {
        self.rounds.len()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn outcomes(&self) -> &[RoundOutcome] {
        &self.outcomes
    }

    pub fn current(&self) -> Option<&Scenario> {
        match self.phase {
            GamePhase::Playing => self.rounds.get(self.round),
            _ => None,
        }
    }

    /// Leave the intro (or a finished game) and deal a fresh set of cards.
    pub fn start(&mut self, rng: &mut impl RandomSource) -> Result<(), DomainError> {
        if self.phase == GamePhase::Playing {
            return Err(DomainError::invalid_state_transition(
                "game is already in progress",
            ));
        }
        let rounds = self.kind.rounds();
        self.rounds = if self.kind.shuffles() {
            sample(&self.pool, rounds, rng)
        } else {
            self.pool.iter().take(rounds).cloned().collect()
        };
        self.phase = GamePhase::Playing;
        self.round = 0;
        self.selected = None;
        self.score = 0;
        self.outcomes.clear();
        Ok(())
    }

    /// Lock in a choice for the current card. Returns whether it was correct.
    pub fn choose(&mut self, choice_id: &str) -> Result<bool, DomainError> {
        if self.selected.is_some() {
            return Err(DomainError::invalid_state_transition(
                "answer already locked for this scenario",
            ));
        }
        let scenario = self.current().ok_or_else(|| {
            DomainError::invalid_state_transition("no scenario is being played")
        })?;
        if scenario.choice(choice_id).is_none() {
            return Err(DomainError::validation(format!(
                "scenario {} has no choice '{}'",
                scenario.id, choice_id
            )));
        }

        let correct = scenario.is_correct(choice_id);
        let outcome = RoundOutcome {
            scenario_id: scenario.id.clone(),
            selected: choice_id.to_string(),
            correct,
        };
        if correct {
            self.score += 1;
        }
        self.outcomes.push(outcome);
        self.selected = Some(choice_id.to_string());
        Ok(correct)
    }

    /// Move past an answered card; the last card leads to the results screen.
    pub fn next(&mut self) -> Result<(), DomainError> {
        if self.phase != GamePhase::Playing || self.selected.is_none() {
            return Err(DomainError::invalid_state_transition(
                "choose an answer before moving on",
            ));
        }
        self.selected = None;
        if self.round + 1 >= self.rounds.len() {
            self.phase = GamePhase::Results;
        } else {
            self.round += 1;
        }
        Ok(())
    }

    pub fn results(&self) -> Option<GameResults> {
        if self.phase != GamePhase::Results {
            return None;
        }
        let pct = percentage(self.score, self.rounds.len());
        let tier = FeedbackTier::from_percentage(pct);
        Some(GameResults {
            score: self.score,
            total: self.rounds.len(),
            percentage: pct,
            tier,
            feedback: self.kind.feedback(tier),
        })
    }

    /// Back to the intro screen with every counter cleared.
    pub fn restart(&mut self) {
        self.phase = GamePhase::Intro;
        self.rounds.clear();
        self.round = 0;
        self.selected = None;
        self.score = 0;
        self.outcomes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ScenarioChoice, ScenarioParams};
    use crate::random::SequenceRandom;

    fn bias_variance(id: &str, train: f64, test: f64, correct: &str) -> Scenario {
        Scenario {
            id: id.into(),
            prompt: format!("Train error {train}, test error {test}"),
            params: ScenarioParams::BiasVariance {
                train_error: train,
                test_error: test,
            },
            choices: vec![
                ScenarioChoice::new("underfit", "Underfitting"),
                ScenarioChoice::new("overfit", "Overfitting"),
                ScenarioChoice::new("good", "Good fit"),
            ],
            correct: correct.into(),
            explanation: String::new(),
        }
    }

    fn pool() -> ScenarioPool {
        ScenarioPool {
            game: GameKind::BiasVariance,
            scenarios: vec![
                bias_variance("bv-1", 2.0, 25.0, "overfit"),
                bias_variance("bv-2", 30.0, 32.0, "underfit"),
                bias_variance("bv-3", 5.0, 6.0, "good"),
                bias_variance("bv-4", 1.0, 18.0, "overfit"),
                bias_variance("bv-5", 22.0, 24.0, "underfit"),
                bias_variance("bv-6", 4.0, 5.5, "good"),
            ],
        }
    }

    fn started() -> ScenarioGame {
        let mut game = ScenarioGame::new(pool()).unwrap();
        game.start(&mut SequenceRandom::identity()).unwrap();
        game
    }

    #[test]
    fn starts_at_intro_with_no_card() {
        let game = ScenarioGame::new(pool()).unwrap();
        assert_eq!(game.phase(), GamePhase::Intro);
        assert!(game.current().is_none());
    }

    #[test]
    fn start_deals_the_configured_number_of_rounds() {
        let game = started();
        assert_eq!(game.total_rounds(), GameKind::BiasVariance.rounds());
        assert_eq!(game.current().map(|s| s.id.as_str()), Some("bv-1"));
    }

    #[test]
    fn overfit_diagnosis_scores_a_point() {
        let mut game = started();
        // bv-1: train error 2, test error 25
        assert!(game.choose("overfit").unwrap());
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn wrong_choice_scores_nothing() {
        let mut game = started();
        assert!(!game.choose("good").unwrap());
        assert_eq!(game.score(), 0);
        assert_eq!(game.outcomes().len(), 1);
    }

    #[test]
    fn choice_is_locked_after_first_pick() {
        let mut game = started();
        game.choose("underfit").unwrap();
        assert!(matches!(
            game.choose("overfit"),
            Err(DomainError::InvalidStateTransition(_))
        ));
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn unknown_choice_is_rejected() {
        let mut game = started();
        assert!(matches!(
            game.choose("maybe"),
            Err(DomainError::Validation(_))
        ));
        assert!(game.selected().is_none());
    }

    #[test]
    fn next_requires_an_answer() {
        let mut game = started();
        assert!(game.next().is_err());
    }

    #[test]
    fn full_play_through_reaches_results_with_tier() {
        let mut game = started();
        let answers = ["overfit", "underfit", "good", "good", "good"];
        for answer in answers {
            game.choose(answer).unwrap();
            game.next().unwrap();
        }
        let results = game.results().unwrap();
        assert_eq!(results.score, 3);
        assert_eq!(results.total, 5);
        assert_eq!(results.percentage, 60);
        assert_eq!(results.tier, FeedbackTier::Good);
        assert_eq!(game.phase(), GamePhase::Results);
    }

    #[test]
    fn restart_returns_to_intro_and_clears_score() {
        let mut game = started();
        game.choose("overfit").unwrap();
        game.restart();
        assert_eq!(game.phase(), GamePhase::Intro);
        assert_eq!(game.score(), 0);
        assert!(game.outcomes().is_empty());
        assert!(game.results().is_none());
    }

    #[test]
    fn cannot_start_twice() {
        let mut game = started();
        assert!(game.start(&mut SequenceRandom::identity()).is_err());
    }

    #[test]
    fn undersized_pool_is_rejected() {
        let mut small = pool();
        small.scenarios.truncate(2);
        assert!(ScenarioGame::new(small).is_err());
    }
}
