use serde::{Deserialize, Serialize};

use crate::ids::ModuleId;

/// A glossary term with a plain definition and an everyday analogy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub term: String,
    pub definition: String,
    pub analogy: String,
    /// Names of related terms, as written in their own entries
    #[serde(default)]
    pub related: Vec<String>,
    /// Module that introduces the term
    pub module: ModuleId,
}

impl GlossaryEntry {
    pub fn new(
        term: impl Into<String>,
        definition: impl Into<String>,
        analogy: impl Into<String>,
        module: impl Into<ModuleId>,
    ) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            analogy: analogy.into(),
            related: Vec::new(),
            module: module.into(),
        }
    }

    pub fn with_related(mut self, related: &[&str]) -> Self {
        self.related = related.iter().map(|r| r.to_string()).collect();
        self
    }
}
