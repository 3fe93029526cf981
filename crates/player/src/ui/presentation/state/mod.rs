//! Reactive UI state shared through Dioxus context

pub mod progress_state;

pub use progress_state::ProgressState;
