//! In-memory implementation of [`TaskRepository`].

use taskboard_app::ports::TaskRepository;
use taskboard_domain::error::TaskboardError;
use taskboard_domain::id::{ProjectId, TaskId};
use taskboard_domain::task::{Task, TaskDraft, TaskPatch};
use taskboard_domain::time::now;

use crate::MemoryStore;

/// Memory-backed task repository.
#[derive(Debug, Clone)]
pub struct MemoryTaskRepository {
    store: MemoryStore,
}

impl MemoryTaskRepository {
    #[must_use]
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

impl TaskRepository for MemoryTaskRepository {
    async fn create(&self, draft: TaskDraft) -> Result<Task, TaskboardError> {
        let task = draft.into_task(TaskId::new(), now());
        self.store.inner.write().await.tasks.push(task.clone());
        Ok(task)
    }

    async fn get_by_id(&self, id: &TaskId) -> Result<Option<Task>, TaskboardError> {
        let guard = self.store.inner.read().await;
        Ok(guard.tasks.iter().find(|t| &t.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Task>, TaskboardError> {
        Ok(self.store.inner.read().await.tasks.clone())
    }

    async fn find_by_project(&self, project_id: &ProjectId) -> Result<Vec<Task>, TaskboardError> {
        let guard = self.store.inner.read().await;
        Ok(guard
            .tasks
            .iter()
            .filter(|t| &t.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: &TaskId, patch: TaskPatch) -> Result<Option<Task>, TaskboardError> {
        let mut guard = self.store.inner.write().await;
        let Some(task) = guard.tasks.iter_mut().find(|t| &t.id == id) else {
            return Ok(None);
        };
        task.apply(patch, now());
        Ok(Some(task.clone()))
    }

    async fn delete(&self, id: &TaskId) -> Result<bool, TaskboardError> {
        let mut guard = self.store.inner.write().await;
        let Some(index) = guard.tasks.iter().position(|t| &t.id == id) else {
            return Ok(false);
        };
        guard.tasks.remove(index);
        Ok(true)
    }
}
