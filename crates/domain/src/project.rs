//! Project: the top-level container that tasks belong to.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::ProjectId;
use crate::time::Timestamp;

/// A named container of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// Overwrite every field present in `patch` and refresh `updated_at`.
    pub fn apply(&mut self, patch: ProjectPatch, now: Timestamp) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        self.updated_at = now;
    }
}

/// Caller input for creating a project.
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
}

impl NewProject {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validate the input and apply defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is blank.
    pub fn into_draft(self) -> Result<ProjectDraft, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName { entity: "Project" });
        }
        Ok(ProjectDraft {
            name: self.name,
            description: self.description.unwrap_or_default(),
        })
    }
}

/// A validated project that has not been persisted yet.
///
/// Repositories turn drafts into [`Project`]s by assigning the id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
}

impl ProjectDraft {
    #[must_use]
    pub fn into_project(self, id: ProjectId, now: Timestamp) -> Project {
        Project {
            id,
            name: self.name,
            description: self.description,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a project. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ProjectPatch {
    /// Check that a provided name is not blank.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is present but blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.name {
            Some(name) if name.trim().is_empty() => {
                Err(ValidationError::EmptyName { entity: "Project" })
            }
            _ => Ok(()),
        }
    }
}
