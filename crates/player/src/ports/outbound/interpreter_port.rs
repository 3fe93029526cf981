//! Interpreter Port - the in-browser code execution bridge
//!
//! The Python runtime is an external collaborator loaded on demand. The code
//! lab only consumes this contract: a readiness signal with discrete loading
//! stages, an async run that yields captured stdout or an error message, and
//! an explicit clear.

use async_trait::async_trait;
use regresslab_domain::LoadingStage;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InterpreterError {
    /// The runtime could not be downloaded or initialised
    #[error("Failed to load the Python runtime: {0}")]
    Load(String),

    /// The code raised or the interpreter exited with an error
    #[error("{0}")]
    Execution(String),
}

/// Port for the code execution bridge
///
/// Futures are not `Send`: the browser adapter awaits JavaScript promises.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait(?Send)]
pub trait InterpreterPort: Send + Sync {
    /// True once `ensure_ready` has completed successfully
    fn is_ready(&self) -> bool;

    /// Current loading stage, for progress display
    fn loading_stage(&self) -> LoadingStage;

    /// Load the runtime if it is not loaded yet. Concurrent callers share one load.
    async fn ensure_ready(&self) -> Result<(), InterpreterError>;

    /// Execute `code` and return everything it printed.
    async fn run(&self, code: &str) -> Result<String, InterpreterError>;

    /// Drop interpreter-held state between playground runs.
    fn clear(&self);
}
