//! Unified error types for the domain layer
//!
//! Provides a common error type for catalog validation and the interaction
//! state machines, so callers never have to match on strings.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., unknown option id, malformed fixture)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid slug format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Content not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// State transition not allowed
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

impl DomainError {
    /// Creates a validation error.
    ///
    /// Use this when an input does not fit the fixture it is checked against:
    /// - An option id that the question does not offer
    /// - An index outside the block list
    /// - A correct-order list that is not a permutation of the blocks
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for GameKind {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "bias-variance" => Ok(Self::BiasVariance),
    ///             _ => Err(DomainError::parse(format!("Unknown game: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an invalid state transition error
    pub fn invalid_state_transition(msg: impl Into<String>) -> Self {
        Self::InvalidStateTransition(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_entity_and_id() {
        let err = DomainError::not_found("Story", "the-lost-gradient");
        assert_eq!(
            err.to_string(),
            "Not found: Story with id the-lost-gradient"
        );
    }

    #[test]
    fn constructors_pick_matching_variant() {
        assert!(matches!(
            DomainError::validation("x"),
            DomainError::Validation(_)
        ));
        assert!(matches!(
            DomainError::invalid_state_transition("x"),
            DomainError::InvalidStateTransition(_)
        ));
    }
}
