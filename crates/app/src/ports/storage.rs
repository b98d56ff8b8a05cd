//! Storage port: repository traits for persistence.
//!
//! Repositories own identity and time: `create` assigns the id and both
//! timestamps, `update` applies the patch and refreshes `updated_at`.
//! Listing returns entities in insertion order.

use std::future::Future;
use std::sync::Arc;

use taskboard_domain::error::TaskboardError;
use taskboard_domain::id::{ProjectId, TaskId};
use taskboard_domain::project::{Project, ProjectDraft, ProjectPatch};
use taskboard_domain::task::{Task, TaskDraft, TaskPatch};

/// Repository for persisting and querying [`Project`]s.
pub trait ProjectRepository {
    /// Persist a new project, assigning its id and timestamps.
    fn create(
        &self,
        draft: ProjectDraft,
    ) -> impl Future<Output = Result<Project, TaskboardError>> + Send;

    /// Get a project by its unique identifier.
    fn get_by_id(
        &self,
        id: &ProjectId,
    ) -> impl Future<Output = Result<Option<Project>, TaskboardError>> + Send;

    /// Get all projects in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Project>, TaskboardError>> + Send;

    /// Apply `patch` to an existing project.
    ///
    /// Resolves to `None` when no project has this id.
    fn update(
        &self,
        id: &ProjectId,
        patch: ProjectPatch,
    ) -> impl Future<Output = Result<Option<Project>, TaskboardError>> + Send;

    /// Delete a project. Resolves to `false` when no project has this id.
    fn delete(&self, id: &ProjectId)
    -> impl Future<Output = Result<bool, TaskboardError>> + Send;
}

/// Repository for persisting and querying [`Task`]s.
pub trait TaskRepository {
    /// Persist a new task, assigning its id and timestamps.
    fn create(&self, draft: TaskDraft)
    -> impl Future<Output = Result<Task, TaskboardError>> + Send;

    /// Get a task by its unique identifier.
    fn get_by_id(
        &self,
        id: &TaskId,
    ) -> impl Future<Output = Result<Option<Task>, TaskboardError>> + Send;

    /// Get all tasks in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Task>, TaskboardError>> + Send;

    /// Get the tasks of one project in insertion order.
    fn find_by_project(
        &self,
        project_id: &ProjectId,
    ) -> impl Future<Output = Result<Vec<Task>, TaskboardError>> + Send;

    /// Apply `patch` to an existing task.
    ///
    /// Resolves to `None` when no task has this id.
    fn update(
        &self,
        id: &TaskId,
        patch: TaskPatch,
    ) -> impl Future<Output = Result<Option<Task>, TaskboardError>> + Send;

    /// Delete a task. Resolves to `false` when no task has this id.
    fn delete(&self, id: &TaskId) -> impl Future<Output = Result<bool, TaskboardError>> + Send;
}

impl<T: ProjectRepository + Send + Sync> ProjectRepository for Arc<T> {
    fn create(
        &self,
        draft: ProjectDraft,
    ) -> impl Future<Output = Result<Project, TaskboardError>> + Send {
        (**self).create(draft)
    }

    fn get_by_id(
        &self,
        id: &ProjectId,
    ) -> impl Future<Output = Result<Option<Project>, TaskboardError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Project>, TaskboardError>> + Send {
        (**self).get_all()
    }

    fn update(
        &self,
        id: &ProjectId,
        patch: ProjectPatch,
    ) -> impl Future<Output = Result<Option<Project>, TaskboardError>> + Send {
        (**self).update(id, patch)
    }

    fn delete(
        &self,
        id: &ProjectId,
    ) -> impl Future<Output = Result<bool, TaskboardError>> + Send {
        (**self).delete(id)
    }
}

impl<T: TaskRepository + Send + Sync> TaskRepository for Arc<T> {
    fn create(
        &self,
        draft: TaskDraft,
    ) -> impl Future<Output = Result<Task, TaskboardError>> + Send {
        (**self).create(draft)
    }

    fn get_by_id(
        &self,
        id: &TaskId,
    ) -> impl Future<Output = Result<Option<Task>, TaskboardError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Task>, TaskboardError>> + Send {
        (**self).get_all()
    }

    fn find_by_project(
        &self,
        project_id: &ProjectId,
    ) -> impl Future<Output = Result<Vec<Task>, TaskboardError>> + Send {
        (**self).find_by_project(project_id)
    }

    fn update(
        &self,
        id: &TaskId,
        patch: TaskPatch,
    ) -> impl Future<Output = Result<Option<Task>, TaskboardError>> + Send {
        (**self).update(id, patch)
    }

    fn delete(&self, id: &TaskId) -> impl Future<Output = Result<bool, TaskboardError>> + Send {
        (**self).delete(id)
    }
}
