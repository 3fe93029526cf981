//! Scenario mini-games
//!
//! All seven games share one state machine; they differ only in their
//! scenario pools, feedback text and the preview bars drawn per card.

mod game;
mod kind;
pub mod visuals;

pub use game::{GamePhase, GameResults, RoundOutcome, ScenarioGame};
pub use kind::GameKind;
pub use visuals::Bar;
