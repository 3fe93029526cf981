//! Python subprocess interpreter for desktop builds
//!
//! Each run is a fresh `python -c` process, so there is no state to clear
//! between runs. Readiness means the configured binary answered `--version`.

use std::sync::Mutex;

use async_trait::async_trait;
use regresslab_domain::LoadingStage;
use tokio::process::Command;

use crate::ports::outbound::{InterpreterError, InterpreterPort};

pub struct PythonProcessInterpreter {
    python: String,
    stage: Mutex<LoadingStage>,
}

impl PythonProcessInterpreter {
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
            stage: Mutex::new(LoadingStage::NotStarted),
        }
    }

    fn set_stage(&self, stage: LoadingStage) {
        match self.stage.lock() {
            Ok(mut current) => *current = stage,
            Err(e) => tracing::error!("Interpreter stage lock poisoned: {}", e),
        }
    }
}

#[async_trait(?Send)]
impl InterpreterPort for PythonProcessInterpreter {
    fn is_ready(&self) -> bool {
        self.loading_stage() == LoadingStage::Ready
    }

    fn loading_stage(&self) -> LoadingStage {
        self.stage
            .lock()
            .map(|s| *s)
            .unwrap_or(LoadingStage::Failed)
    }

    async fn ensure_ready(&self) -> Result<(), InterpreterError> {
        if self.is_ready() {
            return Ok(());
        }
        self.set_stage(LoadingStage::InitializingRuntime);

        let probe = Command::new(&self.python)
            .arg("--version")
            .kill_on_drop(true)
            .output()
            .await;

        match probe {
            Ok(output) if output.status.success() => {
                let version = String::from_utf8_lossy(&output.stdout);
                tracing::info!(python = %self.python, version = %version.trim(), "Python interpreter ready");
                self.set_stage(LoadingStage::Ready);
                Ok(())
            }
            Ok(output) => {
                self.set_stage(LoadingStage::Failed);
                Err(InterpreterError::Load(format!(
                    "{} exited with {}",
                    self.python, output.status
                )))
            }
            Err(e) => {
                self.set_stage(LoadingStage::Failed);
                tracing::warn!(python = %self.python, error = %e, "Python interpreter not found");
                Err(InterpreterError::Load(format!("could not start {}: {}", self.python, e)))
            }
        }
    }

    async fn run(&self, code: &str) -> Result<String, InterpreterError> {
        let output = Command::new(&self.python)
            .arg("-c")
            .arg(code)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| InterpreterError::Execution(e.to_string()))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if output.status.success() {
            Ok(stdout)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(InterpreterError::Execution(format!("{stdout}{stderr}")))
        }
    }

    fn clear(&self) {
        tracing::debug!("Nothing to clear for the subprocess interpreter");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_binary_fails_to_load() {
        let interpreter = PythonProcessInterpreter::new("regresslab-no-such-python");
        let err = interpreter.ensure_ready().await.unwrap_err();
        assert!(matches!(err, InterpreterError::Load(_)));
        assert_eq!(interpreter.loading_stage(), LoadingStage::Failed);
        assert!(!interpreter.is_ready());
    }

    #[test]
    fn starts_not_loaded() {
        let interpreter = PythonProcessInterpreter::new("python3");
        assert_eq!(interpreter.loading_stage(), LoadingStage::NotStarted);
    }
}
