//! Presentation layer - Dioxus UI components and state

pub mod components;
pub mod services;
pub mod state;

pub use services::Services;
