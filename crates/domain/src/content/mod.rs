//! Static course content
//!
//! These types describe the read-only catalog: glossary terms, quizzes,
//! stories, code exercises, lesson modules and game scenario pools.
//! Nothing here mutates after the catalog is built.

pub(crate) mod exercise;
mod glossary;
mod module;
mod quiz;
mod scenario;
mod story;

pub use exercise::{CodeBlock, CodeExercise, CodeStep};
pub use glossary::GlossaryEntry;
pub use module::{CourseModule, LessonSection};
pub use quiz::{Quiz, QuizOption, QuizQuestion};
pub use scenario::{PenaltyKind, Scenario, ScenarioChoice, ScenarioParams, ScenarioPool};
pub use story::{Story, StorySection};
