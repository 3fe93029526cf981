//! Service providers for the presentation layer
//!
//! The runner builds one `Services` bundle and places it in Dioxus context.
//! Components reach application services through `use_context` and never
//! touch infrastructure adapter types directly.

use std::sync::Arc;

use crate::application::services::{CodeRunner, ProgressService};
use crate::ports::outbound::PlatformPort;

/// Progress service over the platform's key-value storage.
pub type UiProgressService = ProgressService<dyn PlatformPort>;

#[derive(Clone)]
pub struct Services {
    pub progress: Arc<UiProgressService>,
    pub code_runner: Arc<CodeRunner>,
}
