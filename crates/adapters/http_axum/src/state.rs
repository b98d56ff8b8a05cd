//! Shared application state for axum handlers.

use std::sync::Arc;

use taskboard_app::ports::{ProjectRepository, TaskRepository};
use taskboard_app::services::project_service::ProjectService;
use taskboard_app::services::task_service::TaskService;

/// Application state shared across all axum handlers.
///
/// Generic over the project repository `PR` and the task repository `TR`
/// to avoid dynamic dispatch. `Clone` is implemented manually so that only
/// the `Arc` wrappers are cloned.
pub struct AppState<PR, TR> {
    /// Project CRUD service.
    pub project_service: Arc<ProjectService<PR>>,
    /// Task CRUD and status service.
    pub task_service: Arc<TaskService<TR, PR>>,
}

impl<PR, TR> Clone for AppState<PR, TR> {
    fn clone(&self) -> Self {
        Self {
            project_service: Arc::clone(&self.project_service),
            task_service: Arc::clone(&self.task_service),
        }
    }
}

impl<PR, TR> AppState<PR, TR>
where
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(project_service: ProjectService<PR>, task_service: TaskService<TR, PR>) -> Self {
        Self {
            project_service: Arc::new(project_service),
            task_service: Arc::new(task_service),
        }
    }

    /// Build both services over a pair of repositories.
    ///
    /// The project repository is cloned so the task service sees the same
    /// projects as the project service.
    pub fn from_repositories(projects: PR, tasks: TR) -> Self
    where
        PR: Clone,
    {
        Self::new(
            ProjectService::new(projects.clone()),
            TaskService::new(tasks, projects),
        )
    }
}
