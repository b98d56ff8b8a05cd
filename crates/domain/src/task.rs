//! Task: a unit of work owned by exactly one project.
//!
//! A task references its project by id. The reference is checked when the
//! task is created and never again: deleting a project leaves its tasks in
//! place with a dangling `project_id`.

mod status;

pub use status::TaskStatus;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{ProjectId, TaskId};
use crate::time::{Date, Timestamp};

/// A unit of work with a two-state status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub project_id: ProjectId,
    pub name: String,
    pub due_date: Option<Date>,
    pub status: TaskStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Task {
    /// Overwrite every field present in `patch` and refresh `updated_at`.
    ///
    /// `project_id` is not patchable.
    pub fn apply(&mut self, patch: TaskPatch, now: Timestamp) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = now;
    }
}

/// Caller input for creating a task inside a project.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub name: String,
    pub due_date: Option<Date>,
    pub status: Option<TaskStatus>,
}

impl NewTask {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            due_date: None,
            status: None,
        }
    }

    #[must_use]
    pub fn with_due_date(mut self, due_date: Date) -> Self {
        self.due_date = Some(due_date);
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Validate the input, attach it to `project_id` and apply defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is blank.
    pub fn into_draft(self, project_id: ProjectId) -> Result<TaskDraft, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName { entity: "Task" });
        }
        Ok(TaskDraft {
            project_id,
            name: self.name,
            due_date: self.due_date,
            status: self.status.unwrap_or_default(),
        })
    }
}

/// A validated task that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub project_id: ProjectId,
    pub name: String,
    pub due_date: Option<Date>,
    pub status: TaskStatus,
}

impl TaskDraft {
    #[must_use]
    pub fn into_task(self, id: TaskId, now: Timestamp) -> Task {
        Task {
            id,
            project_id: self.project_id,
            name: self.name,
            due_date: self.due_date,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a task. `None` leaves the field unchanged;
/// `due_date: Some(None)` clears the due date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub due_date: Option<Option<Date>>,
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    /// A patch that only changes the status.
    #[must_use]
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Check that a provided name is not blank.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is present but blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.name {
            Some(name) if name.trim().is_empty() => {
                Err(ValidationError::EmptyName { entity: "Task" })
            }
            _ => Ok(()),
        }
    }
}

/// Parse a due date given as `YYYY-MM-DD` or as an RFC 3339 timestamp.
///
/// Timestamps are truncated to their UTC calendar date.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDueDate`] when neither format matches.
pub fn parse_due_date(value: &str) -> Result<Date, ValidationError> {
    let value = value.trim();
    if let Ok(date) = Date::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.to_utc().date_naive())
        .map_err(|_| ValidationError::InvalidDueDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::now;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    fn task() -> Task {
        NewTask::new("Write spec")
            .with_due_date(date(2025, 3, 1))
            .into_draft(ProjectId::new())
            .unwrap()
            .into_task(TaskId::new(), now())
    }

    #[test]
    fn should_default_status_to_pending() {
        let draft = NewTask::new("Write spec")
            .into_draft(ProjectId::new())
            .unwrap();
        assert_eq!(draft.status, TaskStatus::Pending);
        assert!(draft.due_date.is_none());
    }

    #[test]
    fn should_keep_explicit_initial_status() {
        let draft = NewTask::new("Ship it")
            .with_status(TaskStatus::Done)
            .into_draft(ProjectId::new())
            .unwrap();
        assert_eq!(draft.status, TaskStatus::Done);
    }

    #[test]
    fn should_reject_draft_when_name_is_empty() {
        let result = NewTask::default().into_draft(ProjectId::new());
        assert_eq!(result, Err(ValidationError::EmptyName { entity: "Task" }));
    }

    #[test]
    fn should_clear_due_date_with_explicit_none() {
        let mut task = task();
        task.apply(
            TaskPatch {
                due_date: Some(None),
                ..TaskPatch::default()
            },
            now(),
        );
        assert!(task.due_date.is_none());
        assert_eq!(task.name, "Write spec");
    }

    #[test]
    fn should_keep_due_date_when_patch_omits_it() {
        let mut task = task();
        task.apply(TaskPatch::status(TaskStatus::Done), now());
        assert_eq!(task.due_date, Some(date(2025, 3, 1)));
        assert_eq!(task.status, TaskStatus::Done);
    }

    #[test]
    fn should_never_change_project_id_when_applying_patch() {
        let mut task = task();
        let project_id = task.project_id.clone();
        task.apply(
            TaskPatch {
                name: Some("Renamed".to_string()),
                ..TaskPatch::default()
            },
            now(),
        );
        assert_eq!(task.project_id, project_id);
        assert_eq!(task.name, "Renamed");
    }

    #[test]
    fn should_parse_plain_date() {
        assert_eq!(parse_due_date("2025-03-01"), Ok(date(2025, 3, 1)));
    }

    #[test]
    fn should_parse_rfc3339_timestamp_as_utc_date() {
        assert_eq!(
            parse_due_date("2025-03-01T23:30:00-02:00"),
            Ok(date(2025, 3, 2))
        );
    }

    #[test]
    fn should_reject_garbage_due_date() {
        assert_eq!(
            parse_due_date("next week"),
            Err(ValidationError::InvalidDueDate("next week".to_string()))
        );
    }

    #[test]
    fn should_serialize_with_camel_case_keys() {
        let json = serde_json::to_value(task()).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["dueDate"], "2025-03-01");
        assert!(json.get("projectId").is_some());
    }
}
