//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`TaskboardError`] via `From`. Adapters box their failures into
//! [`TaskboardError::Storage`].

/// Top-level error returned by domain logic, services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum TaskboardError {
    /// The caller supplied malformed or missing input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A referenced entity does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input rejected before reaching persistence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `name` was missing, empty or only whitespace.
    #[error("{entity} name is required")]
    EmptyName { entity: &'static str },

    /// An identifier was missing, empty or only whitespace.
    #[error("{entity} ID is required")]
    MissingId { entity: &'static str },

    /// The status field was absent from a status update.
    #[error("Status is required")]
    MissingStatus,

    /// The status was not one of the two known values.
    #[error("Status must be either \"pending\" or \"done\", got {0:?}")]
    InvalidStatus(String),

    /// The due date could not be parsed as a calendar date.
    #[error("Due date must be a date formatted as YYYY-MM-DD, got {0:?}")]
    InvalidDueDate(String),
}

/// A referenced entity does not exist.
///
/// The message is fixed per entity kind; the id is kept for logging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
