//! Typed identifier newtypes.
//!
//! Identifiers are opaque strings. Fresh ones are random UUIDs, but any
//! non-blank string parses so that ids issued by other stores stay valid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident, $entity:literal) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl Default for $name {
            fn default() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }
        }

        impl $name {
            /// Generate a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            /// Borrow the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::MissingId { entity: $entity });
                }
                Ok(Self(trimmed.to_string()))
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Project`](crate::project::Project).
    ProjectId,
    "Project"
);

define_id!(
    /// Unique identifier for a [`Task`](crate::task::Task).
    TaskId,
    "Task"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_unique_ids_when_called_twice() {
        let a = ProjectId::new();
        let b = ProjectId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = TaskId::new();
        let parsed: TaskId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_accept_opaque_non_uuid_ids() {
        let id: ProjectId = "1718031234567".parse().unwrap();
        assert_eq!(id.as_str(), "1718031234567");
    }

    #[test]
    fn should_reject_empty_id_with_entity_name() {
        let result = ProjectId::from_str("");
        assert_eq!(
            result,
            Err(ValidationError::MissingId { entity: "Project" })
        );
    }

    #[test]
    fn should_reject_blank_task_id() {
        let result = TaskId::from_str("   ");
        assert_eq!(result, Err(ValidationError::MissingId { entity: "Task" }));
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let id: TaskId = "t-1".parse().unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"t-1\"");
    }
}
