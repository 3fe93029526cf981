use serde::{Deserialize, Serialize};

use crate::ids::{ExerciseId, ModuleId};

/// One heading plus body text inside a lesson page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonSection {
    pub heading: String,
    pub body: String,
}

/// One lesson unit of the course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseModule {
    pub id: ModuleId,
    /// 1-based position in the course
    pub number: u8,
    pub title: String,
    pub summary: String,
    pub lessons: Vec<LessonSection>,
    /// Code lab attached to this module, if any
    pub exercise: Option<ExerciseId>,
}
