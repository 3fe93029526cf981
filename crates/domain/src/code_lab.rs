//! Code lab modal
//!
//! Four stages: explanation cards, the ordering exercise, a result screen
//! and a playground whose listing can be sent to the interpreter bridge.
//! The bridge itself lives outside the domain; this module only tracks
//! which run is outstanding and what came back.

use serde::{Deserialize, Serialize};

use crate::content::CodeExercise;
use crate::error::DomainError;
use crate::ordering::{OrderingExercise, OrderingResult};
use crate::random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum CodeLabStage {
    Explanation { step: usize },
    Exercise,
    Result { passed: bool },
    Playground,
}

/// Playground execution state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RunState {
    Idle,
    Running,
    Finished { output: String },
    Failed { message: String },
}

impl RunState {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// Text for the output pane, if there is any.
    pub fn output_text(&self) -> Option<&str> {
        match self {
            Self::Finished { output } => Some(output),
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Discrete loading stages reported by the interpreter bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadingStage {
    #[default]
    NotStarted,
    DownloadingRuntime,
    InitializingRuntime,
    LoadingPackages,
    Ready,
    Failed,
}

impl LoadingStage {
    pub fn progress_percent(&self) -> u8 {
        match self {
            Self::NotStarted | Self::Failed => 0,
            Self::DownloadingRuntime => 25,
            Self::InitializingRuntime => 50,
            Self::LoadingPackages => 75,
            Self::Ready => 100,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "Python not loaded",
            Self::DownloadingRuntime => "Downloading Python runtime...",
            Self::InitializingRuntime => "Starting Python...",
            Self::LoadingPackages => "Loading packages...",
            Self::Ready => "Python ready",
            Self::Failed => "Python failed to load",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            Self::DownloadingRuntime | Self::InitializingRuntime | Self::LoadingPackages
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeLab {
    exercise: CodeExercise,
    stage: CodeLabStage,
    ordering: Option<OrderingExercise>,
    last_result: Option<OrderingResult>,
    run: RunState,
}

impl CodeLab {
    pub fn new(exercise: CodeExercise) -> Result<Self, DomainError> {
        exercise.validate()?;
        Ok(Self {
            exercise,
            stage: CodeLabStage::Explanation { step: 0 },
            ordering: None,
            last_result: None,
            run: RunState::Idle,
        })
    }

    pub fn exercise(&self) -> &CodeExercise {
        &self.exercise
    }

    pub fn stage(&self) -> CodeLabStage {
        self.stage
    }

    pub fn ordering(&self) -> Option<&OrderingExercise> {
        self.ordering.as_ref()
    }

    pub fn ordering_mut(&mut self) -> Option<&mut OrderingExercise> {
        self.ordering.as_mut()
    }

    pub fn last_result(&self) -> Option<&OrderingResult> {
        self.last_result.as_ref()
    }

    pub fn run_state(&self) -> &RunState {
        &self.run
    }

    pub fn step_count(&self) -> usize {
        self.exercise.steps.len()
    }

    pub fn next_step(&mut self) -> Result<(), DomainError> {
        match self.stage {
            CodeLabStage::Explanation { step } if step + 1 < self.step_count() => {
                self.stage = CodeLabStage::Explanation { step: step + 1 };
                Ok(())
            }
            CodeLabStage::Explanation { .. } => Err(DomainError::invalid_state_transition(
                "already on the last explanation step",
            )),
            _ => Err(DomainError::invalid_state_transition(
                "not showing explanations",
            )),
        }
    }

    pub fn prev_step(&mut self) -> Result<(), DomainError> {
        match self.stage {
            CodeLabStage::Explanation { step } if step > 0 => {
                self.stage = CodeLabStage::Explanation { step: step - 1 };
                Ok(())
            }
            _ => Err(DomainError::invalid_state_transition(
                "no earlier explanation step",
            )),
        }
    }

    /// Enter the ordering exercise from any explanation step.
    pub fn start_exercise(&mut self, rng: &mut impl RandomSource) -> Result<(), DomainError> {
        if !matches!(self.stage, CodeLabStage::Explanation { .. }) {
            return Err(DomainError::invalid_state_transition(
                "exercise starts from the explanation",
            ));
        }
        self.enter_exercise(rng)
    }

    fn enter_exercise(&mut self, rng: &mut impl RandomSource) -> Result<(), DomainError> {
        self.ordering = Some(OrderingExercise::new(
            self.exercise.blocks.clone(),
            self.exercise.correct_order.clone(),
            rng,
        )?);
        self.stage = CodeLabStage::Exercise;
        Ok(())
    }

    /// Submit the arrangement and show the verdict.
    pub fn submit_exercise(&mut self) -> Result<&OrderingResult, DomainError> {
        if self.stage != CodeLabStage::Exercise {
            return Err(DomainError::invalid_state_transition(
                "no exercise in progress",
            ));
        }
        let ordering = self
            .ordering
            .as_mut()
            .ok_or_else(|| DomainError::invalid_state_transition("exercise not loaded"))?;
        let result = ordering.submit().clone();
        self.stage = CodeLabStage::Result {
            passed: result.is_correct,
        };
        let result: &OrderingResult = self.last_result.insert(result);
        Ok(result)
    }

    /// Back from the result screen to a freshly shuffled exercise.
    pub fn retry_exercise(&mut self, rng: &mut impl RandomSource) -> Result<(), DomainError> {
        if !matches!(self.stage, CodeLabStage::Result { .. }) {
            return Err(DomainError::invalid_state_transition(
                "retry is offered on the result screen",
            ));
        }
        self.enter_exercise(rng)
    }

    pub fn open_playground(&mut self) -> Result<(), DomainError> {
        if !matches!(self.stage, CodeLabStage::Result { .. }) {
            return Err(DomainError::invalid_state_transition(
                "playground opens from the result screen",
            ));
        }
        self.stage = CodeLabStage::Playground;
        Ok(())
    }

    /// Return to the first explanation card, dropping exercise and output.
    /// Refused while a run is outstanding.
    pub fn back_to_explanation(&mut self) -> Result<(), DomainError> {
        if self.run.is_running() {
            return Err(DomainError::invalid_state_transition(
                "wait for the running code to finish",
            ));
        }
        self.stage = CodeLabStage::Explanation { step: 0 };
        self.ordering = None;
        self.run = RunState::Idle;
        Ok(())
    }

    /// Mark a run as outstanding and hand back the listing to execute.
    pub fn begin_run(&mut self) -> Result<String, DomainError> {
        if self.stage != CodeLabStage::Playground {
            return Err(DomainError::invalid_state_transition(
                "code runs only in the playground",
            ));
        }
        if self.run.is_running() {
            return Err(DomainError::invalid_state_transition(
                "a run is already in progress",
            ));
        }
        self.run = RunState::Running;
        Ok(self.exercise.playground_code.clone())
    }

    /// Store what the bridge returned: captured stdout or an error message.
    /// Ignored unless a run is outstanding.
    pub fn finish_run(&mut self, outcome: Result<String, String>) {
        if !self.run.is_running() {
            return;
        }
        self.run = match outcome {
            Ok(output) => RunState::Finished { output },
            Err(message) => RunState::Failed { message },
        };
    }

    pub fn clear_output(&mut self) {
        if !self.run.is_running() {
            self.run = RunState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CodeBlock, CodeStep};
    use crate::ids::ExerciseId;
    use crate::random::SequenceRandom;

    fn exercise() -> CodeExercise {
        CodeExercise {
            id: ExerciseId::new("linear-fit"),
            title: "Fit a line".into(),
            steps: vec![
                CodeStep {
                    title: "Import".into(),
                    explanation: "Bring in numpy.".into(),
                    code: "import numpy as np".into(),
                },
                CodeStep {
                    title: "Fit".into(),
                    explanation: "Fit a degree-1 polynomial.".into(),
                    code: "np.polyfit(x, y, 1)".into(),
                },
            ],
            blocks: vec![
                CodeBlock::new("a", "Import", "import numpy as np"),
                CodeBlock::new("b", "Fit", "np.polyfit(x, y, 1)"),
            ],
            correct_order: vec!["a".into(), "b".into()],
            playground_code: "print(1 + 1)".into(),
        }
    }

    fn lab_at_result(passed: bool) -> CodeLab {
        let mut lab = CodeLab::new(exercise()).unwrap();
        lab.start_exercise(&mut SequenceRandom::identity()).unwrap();
        if !passed {
            lab.ordering_mut().unwrap().move_block(0, 1).unwrap();
        }
        lab.submit_exercise().unwrap();
        lab
    }

    #[test]
    fn explanation_paginates_within_bounds() {
        let mut lab = CodeLab::new(exercise()).unwrap();
        assert!(lab.prev_step().is_err());
        lab.next_step().unwrap();
        assert_eq!(lab.stage(), CodeLabStage::Explanation { step: 1 });
        assert!(lab.next_step().is_err());
        lab.prev_step().unwrap();
        assert_eq!(lab.stage(), CodeLabStage::Explanation { step: 0 });
    }

    #[test]
    fn correct_submission_lands_on_passed_result() {
        let lab = lab_at_result(true);
        assert_eq!(lab.stage(), CodeLabStage::Result { passed: true });
        assert!(lab.last_result().unwrap().is_correct);
    }

    #[test]
    fn wrong_submission_lands_on_failed_result() {
        let lab = lab_at_result(false);
        assert_eq!(lab.stage(), CodeLabStage::Result { passed: false });
    }

    #[test]
    fn retry_goes_back_to_a_fresh_exercise() {
        let mut lab = lab_at_result(false);
        lab.retry_exercise(&mut SequenceRandom::identity()).unwrap();
        assert_eq!(lab.stage(), CodeLabStage::Exercise);
        assert!(!lab.ordering().unwrap().is_submitted());
    }

    #[test]
    fn runs_are_only_allowed_in_playground() {
        let mut lab = lab_at_result(true);
        assert!(lab.begin_run().is_err());
        lab.open_playground().unwrap();
        assert_eq!(lab.begin_run().unwrap(), "print(1 + 1)");
    }

    #[test]
    fn concurrent_runs_are_refused() {
        let mut lab = lab_at_result(true);
        lab.open_playground().unwrap();
        lab.begin_run().unwrap();
        assert!(lab.begin_run().is_err());
        lab.finish_run(Ok("2\n".into()));
        assert_eq!(lab.run_state().output_text(), Some("2\n"));
        assert!(lab.begin_run().is_ok());
    }

    #[test]
    fn failed_run_shows_error_text_and_clears() {
        let mut lab = lab_at_result(true);
        lab.open_playground().unwrap();
        lab.begin_run().unwrap();
        lab.finish_run(Err("NameError: name 'x' is not defined".into()));
        assert_eq!(
            lab.run_state(),
            &RunState::Failed {
                message: "NameError: name 'x' is not defined".into()
            }
        );
        lab.clear_output();
        assert_eq!(lab.run_state(), &RunState::Idle);
    }

    #[test]
    fn clear_output_does_not_cancel_a_running_job() {
        let mut lab = lab_at_result(true);
        lab.open_playground().unwrap();
        lab.begin_run().unwrap();
        lab.clear_output();
        assert!(lab.run_state().is_running());
    }

    #[test]
    fn leaving_the_playground_waits_for_the_running_job() {
        let mut lab = lab_at_result(true);
        lab.open_playground().unwrap();
        lab.begin_run().unwrap();

        assert!(lab.back_to_explanation().is_err());
        assert_eq!(lab.stage(), CodeLabStage::Playground);
        assert!(lab.run_state().is_running());
        assert!(lab.begin_run().is_err());

        lab.finish_run(Ok("2\n".into()));
        lab.back_to_explanation().unwrap();
        assert_eq!(lab.stage(), CodeLabStage::Explanation { step: 0 });
        assert_eq!(lab.run_state(), &RunState::Idle);
    }

    #[test]
    fn result_without_an_outstanding_run_is_dropped() {
        let mut lab = lab_at_result(true);
        lab.open_playground().unwrap();
        lab.finish_run(Ok("left over".into()));
        assert_eq!(lab.run_state(), &RunState::Idle);

        lab.begin_run().unwrap();
        lab.finish_run(Ok("fresh".into()));
        lab.finish_run(Ok("late duplicate".into()));
        assert_eq!(lab.run_state().output_text(), Some("fresh"));
    }

    #[test]
    fn loading_stage_progress_is_monotonic() {
        let stages = [
            LoadingStage::NotStarted,
            LoadingStage::DownloadingRuntime,
            LoadingStage::InitializingRuntime,
            LoadingStage::LoadingPackages,
            LoadingStage::Ready,
        ];
        for pair in stages.windows(2) {
            assert!(pair[0].progress_percent() < pair[1].progress_percent());
        }
    }
}
