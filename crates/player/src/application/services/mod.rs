//! Application services - use cases between the UI and the ports

mod code_runner;
mod progress_service;
mod random;

pub use code_runner::CodeRunner;
pub use progress_service::{ProgressError, ProgressService};
pub use random::PlatformRandom;
