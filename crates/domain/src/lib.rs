pub mod code_lab;
pub mod content;
pub mod error;
pub mod games;
pub mod glossary;
pub mod ids;
pub mod ordering;
pub mod progress;
pub mod quiz_flow;
pub mod random;
pub mod scoring;

// Re-export content types
pub use content::{
    CodeBlock, CodeExercise, CodeStep, CourseModule, GlossaryEntry, LessonSection, PenaltyKind,
    Quiz, QuizOption, QuizQuestion, Scenario, ScenarioChoice, ScenarioParams, ScenarioPool, Story,
    StorySection,
};

pub use error::DomainError;

// Re-export interaction state machines
pub use code_lab::{CodeLab, CodeLabStage, LoadingStage, RunState};
pub use games::{Bar, GameKind, GamePhase, GameResults, RoundOutcome, ScenarioGame};
pub use glossary::{place_popover, GlossaryIndex, Placement, Rect, Size};
pub use ordering::{OrderingExercise, OrderingResult};
pub use quiz_flow::{QuizFlow, QuizPhase};

pub use ids::{ExerciseId, ModuleId, StoryId};
pub use progress::{ModuleProgress, ProgressRecord};
pub use random::{RandomSource, SequenceRandom};
pub use scoring::{FeedbackTier, PASS_THRESHOLD};
