use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Slug identifiers travel in route paths and in the persisted progress
/// record, so they are plain lowercase strings rather than UUIDs.
macro_rules! define_slug {
    ($name:ident, $entity:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create from a slug known to be well-formed (catalog literals).
            pub fn new(slug: impl Into<String>) -> Self {
                Self(slug.into())
            }

            /// Parse a slug coming from outside the catalog (route params, storage).
            pub fn parse(slug: &str) -> Result<Self, DomainError> {
                slug.parse()
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let slug = s.trim();
                if slug.is_empty() {
                    return Err(DomainError::invalid_id(concat!($entity, " slug is empty")));
                }
                if !slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
                {
                    return Err(DomainError::invalid_id(format!(
                        "{} slug '{}' may only contain a-z, 0-9 and '-'",
                        $entity, slug
                    )));
                }
                Ok(Self(slug.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_slug!(ModuleId, "Module");
define_slug!(StoryId, "Story");
define_slug!(ExerciseId, "Exercise");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_kebab_case() {
        let id = ModuleId::parse("module-1").unwrap();
        assert_eq!(id.as_str(), "module-1");
    }

    #[test]
    fn parse_trims_whitespace() {
        let id = StoryId::parse("  the-overfit-oracle ").unwrap();
        assert_eq!(id.to_string(), "the-overfit-oracle");
    }

    #[test]
    fn parse_rejects_empty_and_odd_characters() {
        assert!(matches!(ModuleId::parse("   "), Err(DomainError::InvalidId(_))));
        assert!(matches!(ModuleId::parse("Module 1"), Err(DomainError::InvalidId(_))));
        assert!(matches!(ModuleId::parse("../etc"), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn serializes_as_bare_string() {
        let json = serde_json::to_string(&ModuleId::new("module-3")).unwrap();
        assert_eq!(json, "\"module-3\"");
    }
}
