use serde::{Deserialize, Serialize};

use crate::ids::{ModuleId, StoryId};

/// One block of a story, rendered differently per kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StorySection {
    Narrative { text: String },
    Dialogue { speaker: String, text: String },
    Lesson { title: String, text: String },
    Revelation { text: String },
}

impl StorySection {
    pub fn narrative(text: impl Into<String>) -> Self {
        Self::Narrative { text: text.into() }
    }

    pub fn dialogue(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Dialogue {
            speaker: speaker.into(),
            text: text.into(),
        }
    }

    pub fn lesson(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Lesson {
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn revelation(text: impl Into<String>) -> Self {
        Self::Revelation { text: text.into() }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Narrative { text }
            | Self::Dialogue { text, .. }
            | Self::Lesson { text, .. }
            | Self::Revelation { text } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub subtitle: String,
    /// Module the story illustrates
    pub module: Option<ModuleId>,
    pub sections: Vec<StorySection>,
}

impl Story {
    /// Rough reading time at 200 words per minute, never below one minute.
    pub fn reading_minutes(&self) -> usize {
        let words: usize = self
            .sections
            .iter()
            .map(|s| s.text().split_whitespace().count())
            .sum();
        words.div_ceil(200).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_minutes_has_a_floor_of_one() {
        let story = Story {
            id: StoryId::new("short"),
            title: "Short".into(),
            subtitle: String::new(),
            module: None,
            sections: vec![StorySection::narrative("Once upon a residual.")],
        };
        assert_eq!(story.reading_minutes(), 1);
    }

    #[test]
    fn sections_serialize_with_kind_tag() {
        let json = serde_json::to_value(StorySection::dialogue("Ada", "Fit the line.")).unwrap();
        assert_eq!(json["kind"], "dialogue");
        assert_eq!(json["speaker"], "Ada");
    }
}
