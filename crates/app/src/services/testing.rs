//! In-memory repositories shared by the service tests.

use std::future::Future;
use std::sync::Mutex;

use taskboard_domain::error::TaskboardError;
use taskboard_domain::id::{ProjectId, TaskId};
use taskboard_domain::project::{Project, ProjectDraft, ProjectPatch};
use taskboard_domain::task::{Task, TaskDraft, TaskPatch};
use taskboard_domain::time::now;

use crate::ports::{ProjectRepository, TaskRepository};

#[derive(Default)]
pub(crate) struct InMemoryProjectRepo {
    store: Mutex<Vec<Project>>,
}

impl ProjectRepository for InMemoryProjectRepo {
    fn create(
        &self,
        draft: ProjectDraft,
    ) -> impl Future<Output = Result<Project, TaskboardError>> + Send {
        let project = draft.into_project(ProjectId::new(), now());
        self.store.lock().unwrap().push(project.clone());
        async { Ok(project) }
    }

    fn get_by_id(
        &self,
        id: &ProjectId,
    ) -> impl Future<Output = Result<Option<Project>, TaskboardError>> + Send {
        let store = self.store.lock().unwrap();
        let result = store.iter().find(|p| &p.id == id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Project>, TaskboardError>> + Send {
        let result = self.store.lock().unwrap().clone();
        async { Ok(result) }
    }

    fn update(
        &self,
        id: &ProjectId,
        patch: ProjectPatch,
    ) -> impl Future<Output = Result<Option<Project>, TaskboardError>> + Send {
        let mut store = self.store.lock().unwrap();
        let result = store.iter_mut().find(|p| &p.id == id).map(|project| {
            project.apply(patch, now());
            project.clone()
        });
        async { Ok(result) }
    }

    fn delete(
        &self,
        id: &ProjectId,
    ) -> impl Future<Output = Result<bool, TaskboardError>> + Send {
        let mut store = self.store.lock().unwrap();
        let before = store.len();
        store.retain(|p| &p.id != id);
        let removed = store.len() != before;
        async move { Ok(removed) }
    }
}

#[derive(Default)]
pub(crate) struct InMemoryTaskRepo {
    store: Mutex<Vec<Task>>,
}

impl TaskRepository for InMemoryTaskRepo {
    fn create(
        &self,
        draft: TaskDraft,
    ) -> impl Future<Output = Result<Task, TaskboardError>> + Send {
        let task = draft.into_task(TaskId::new(), now());
        self.store.lock().unwrap().push(task.clone());
        async { Ok(task) }
    }

    fn get_by_id(
        &self,
        id: &TaskId,
    ) -> impl Future<Output = Result<Option<Task>, TaskboardError>> + Send {
        let store = self.store.lock().unwrap();
        let result = store.iter().find(|t| &t.id == id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Task>, TaskboardError>> + Send {
        let result = self.store.lock().unwrap().clone();
        async { Ok(result) }
    }

    fn find_by_project(
        &self,
        project_id: &ProjectId,
    ) -> impl Future<Output = Result<Vec<Task>, TaskboardError>> + Send {
        let store = self.store.lock().unwrap();
        let result: Vec<Task> = store
            .iter()
            .filter(|t| &t.project_id == project_id)
            .cloned()
            .collect();
        async { Ok(result) }
    }

    fn update(
        &self,
        id: &TaskId,
        patch: TaskPatch,
    ) -> impl Future<Output = Result<Option<Task>, TaskboardError>> + Send {
        let mut store = self.store.lock().unwrap();
        let result = store.iter_mut().find(|t| &t.id == id).map(|task| {
            task.apply(patch, now());
            task.clone()
        });
        async { Ok(result) }
    }

    fn delete(&self, id: &TaskId) -> impl Future<Output = Result<bool, TaskboardError>> + Send {
        let mut store = self.store.lock().unwrap();
        let before = store.len();
        store.retain(|t| &t.id != id);
        let removed = store.len() != before;
        async move { Ok(removed) }
    }
}
