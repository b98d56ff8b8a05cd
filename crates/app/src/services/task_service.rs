//! Task service: use-cases for managing tasks.
//!
//! Tasks are checked against their project only when they are listed or
//! created. Every other operation addresses a task by its own id.

use taskboard_domain::error::{NotFoundError, TaskboardError};
use taskboard_domain::id::{ProjectId, TaskId};
use taskboard_domain::task::{NewTask, Task, TaskPatch, TaskStatus};

use crate::ports::{ProjectRepository, TaskRepository};

/// Application service for task CRUD and status changes.
///
/// Reads projects through `P` to check that they exist, never writes them.
pub struct TaskService<T, P> {
    tasks: T,
    projects: P,
}

impl<T, P> TaskService<T, P>
where
    T: TaskRepository,
    P: ProjectRepository,
{
    /// Create a new service backed by the given task and project repositories.
    pub fn new(tasks: T, projects: P) -> Self {
        Self { tasks, projects }
    }

    async fn ensure_project_exists(&self, project_id: &ProjectId) -> Result<(), TaskboardError> {
        if self.projects.get_by_id(project_id).await?.is_none() {
            return Err(NotFoundError {
                entity: "Project",
                id: project_id.to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// List the tasks of a project in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskboardError::NotFound`] when the project does not exist,
    /// or a storage error from either repository.
    #[tracing::instrument(skip(self, project_id), fields(project_id = %project_id))]
    pub async fn list_tasks(&self, project_id: &ProjectId) -> Result<Vec<Task>, TaskboardError> {
        self.ensure_project_exists(project_id).await?;
        self.tasks.find_by_project(project_id).await
    }

    /// Look up a task by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, id), fields(task_id = %id))]
    pub async fn get_task(&self, id: &TaskId) -> Result<Option<Task>, TaskboardError> {
        self.tasks.get_by_id(id).await
    }

    /// Create a task inside an existing project.
    ///
    /// The status defaults to [`TaskStatus::Pending`] and the due date to none.
    ///
    /// # Errors
    ///
    /// Returns [`TaskboardError::NotFound`] when the project does not exist,
    /// [`TaskboardError::Validation`] when the name is blank, or a storage
    /// error from either repository.
    #[tracing::instrument(
        skip(self, project_id, input),
        fields(project_id = %project_id, task_name = %input.name)
    )]
    pub async fn create_task(
        &self,
        project_id: &ProjectId,
        input: NewTask,
    ) -> Result<Task, TaskboardError> {
        self.ensure_project_exists(project_id).await?;
        let draft = input.into_draft(project_id.clone())?;
        let task = self.tasks.create(draft).await?;
        tracing::info!(task_id = %task.id, status = %task.status, "task created");
        Ok(task)
    }

    /// Apply a partial update to a task.
    ///
    /// Resolves to `None` when the task does not exist, before the patch
    /// itself is validated.
    ///
    /// # Errors
    ///
    /// Returns [`TaskboardError::Validation`] if a blank name is provided, or
    /// a storage error from the repository.
    #[tracing::instrument(skip(self, id, patch), fields(task_id = %id))]
    pub async fn update_task(
        &self,
        id: &TaskId,
        patch: TaskPatch,
    ) -> Result<Option<Task>, TaskboardError> {
        if self.tasks.get_by_id(id).await?.is_none() {
            tracing::debug!("task not found");
            return Ok(None);
        }
        patch.validate()?;
        self.tasks.update(id, patch).await
    }

    /// Move a task to `status`. Any transition between the two states is allowed.
    ///
    /// Resolves to `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, id), fields(task_id = %id))]
    pub async fn update_task_status(
        &self,
        id: &TaskId,
        status: TaskStatus,
    ) -> Result<Option<Task>, TaskboardError> {
        let updated = self.tasks.update(id, TaskPatch::status(status)).await?;
        match &updated {
            Some(_) => tracing::info!("task status changed"),
            None => tracing::debug!("task not found"),
        }
        Ok(updated)
    }

    /// Delete a task by id.
    ///
    /// Resolves to `false` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, id), fields(task_id = %id))]
    pub async fn delete_task(&self, id: &TaskId) -> Result<bool, TaskboardError> {
        let deleted = self.tasks.delete(id).await?;
        if deleted {
            tracing::info!("task deleted");
        }
        Ok(deleted)
    }
}
