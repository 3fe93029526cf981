//! Reusable UI components

pub mod code_lab_modal;
pub mod glossary_popover;
pub mod ordering;
pub mod progress_badge;
pub mod quiz;
pub mod scenario_game;
pub mod story_section;
