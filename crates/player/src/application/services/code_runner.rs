//! Code runner - drives the interpreter bridge for the code lab playground
//!
//! The runner owns no lab state. The UI asks the lab for the listing via
//! `CodeLab::begin_run`, awaits `execute`, then hands the outcome back with
//! `CodeLab::finish_run`, so the lab is never borrowed across an await.

use std::sync::Arc;

use regresslab_domain::{CodeLab, LoadingStage};

use crate::ports::outbound::InterpreterPort;

#[derive(Clone)]
pub struct CodeRunner {
    interpreter: Arc<dyn InterpreterPort>,
}

impl CodeRunner {
    pub fn new(interpreter: Arc<dyn InterpreterPort>) -> Self {
        Self { interpreter }
    }

    pub fn loading_stage(&self) -> LoadingStage {
        self.interpreter.loading_stage()
    }

    pub fn is_ready(&self) -> bool {
        self.interpreter.is_ready()
    }

    /// Start loading the runtime ahead of the first run.
    pub async fn preload(&self) {
        if let Err(e) = self.interpreter.ensure_ready().await {
            tracing::warn!(error = %e, "Python runtime preload failed");
        }
    }

    /// Run `code`, loading the runtime first if needed.
    ///
    /// The error side carries the message shown in the output panel.
    pub async fn execute(&self, code: &str) -> Result<String, String> {
        self.interpreter
            .ensure_ready()
            .await
            .map_err(|e| e.to_string())?;

        tracing::debug!(bytes = code.len(), "Running playground code");
        match self.interpreter.run(code).await {
            Ok(output) => Ok(output),
            Err(e) => {
                tracing::debug!(error = %e, "Playground code failed");
                Err(e.to_string())
            }
        }
    }

    /// Clear the output panel and the interpreter's namespace.
    pub fn clear(&self, lab: &mut CodeLab) {
        lab.clear_output();
        self.interpreter.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{InterpreterError, MockInterpreterPort};
    use regresslab_domain::{ExerciseId, RunState, SequenceRandom};

    fn playground_lab() -> CodeLab {
        let exercise = regresslab_shared::code_exercise(&ExerciseId::new("first-regression"))
            .cloned()
            .unwrap();
        let mut lab = CodeLab::new(exercise).unwrap();
        lab.start_exercise(&mut SequenceRandom::identity()).unwrap();
        lab.submit_exercise().unwrap();
        lab.open_playground().unwrap();
        lab
    }

    #[tokio::test]
    async fn successful_run_returns_captured_output() {
        let mut interpreter = MockInterpreterPort::new();
        interpreter.expect_ensure_ready().times(1).returning(|| Ok(()));
        interpreter
            .expect_run()
            .times(1)
            .returning(|_| Ok("slope = 2.0\n".to_string()));

        let runner = CodeRunner::new(Arc::new(interpreter));
        let mut lab = playground_lab();
        let code = lab.begin_run().unwrap();
        let outcome = runner.execute(&code).await;
        lab.finish_run(outcome);

        assert_eq!(
            lab.run_state(),
            &RunState::Finished {
                output: "slope = 2.0\n".to_string()
            }
        );
    }

    #[tokio::test]
    async fn load_failure_skips_the_run() {
        let mut interpreter = MockInterpreterPort::new();
        interpreter
            .expect_ensure_ready()
            .returning(|| Err(InterpreterError::Load("network unreachable".into())));
        interpreter.expect_run().never();

        let runner = CodeRunner::new(Arc::new(interpreter));
        let outcome = runner.execute("print(1)").await;

        assert_eq!(
            outcome,
            Err("Failed to load the Python runtime: network unreachable".to_string())
        );
    }

    #[tokio::test]
    async fn execution_error_reaches_the_output_panel() {
        let mut interpreter = MockInterpreterPort::new();
        interpreter.expect_ensure_ready().returning(|| Ok(()));
        interpreter.expect_run().returning(|_| {
            Err(InterpreterError::Execution(
                "NameError: name 'x' is not defined".into(),
            ))
        });

        let runner = CodeRunner::new(Arc::new(interpreter));
        let mut lab = playground_lab();
        let code = lab.begin_run().unwrap();
        lab.finish_run(runner.execute(&code).await);

        assert_eq!(
            lab.run_state().output_text(),
            Some("NameError: name 'x' is not defined")
        );
        assert!(matches!(lab.run_state(), RunState::Failed { .. }));
    }

    #[test]
    fn second_run_is_refused_while_one_is_outstanding() {
        let mut lab = playground_lab();
        lab.begin_run().unwrap();
        assert!(lab.begin_run().is_err());
    }

    #[test]
    fn clear_resets_output_and_interpreter() {
        let mut interpreter = MockInterpreterPort::new();
        interpreter.expect_clear().times(1).return_const(());

        let runner = CodeRunner::new(Arc::new(interpreter));
        let mut lab = playground_lab();
        lab.begin_run().unwrap();
        lab.finish_run(Ok("done".into()));
        runner.clear(&mut lab);

        assert_eq!(lab.run_state(), &RunState::Idle);
    }

    #[test]
    fn loading_stage_comes_from_the_interpreter() {
        let mut interpreter = MockInterpreterPort::new();
        interpreter
            .expect_loading_stage()
            .return_const(LoadingStage::LoadingPackages);
        interpreter.expect_is_ready().return_const(false);

        let runner = CodeRunner::new(Arc::new(interpreter));
        assert_eq!(runner.loading_stage(), LoadingStage::LoadingPackages);
        assert!(!runner.is_ready());
    }
}
