//! In-memory implementation of [`ProjectRepository`].

use taskboard_app::ports::ProjectRepository;
use taskboard_domain::error::TaskboardError;
use taskboard_domain::id::ProjectId;
use taskboard_domain::project::{Project, ProjectDraft, ProjectPatch};
use taskboard_domain::time::now;

use crate::MemoryStore;

/// Memory-backed project repository.
#[derive(Debug, Clone)]
pub struct MemoryProjectRepository {
    store: MemoryStore,
}

impl MemoryProjectRepository {
    #[must_use]
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

impl ProjectRepository for MemoryProjectRepository {
    async fn create(&self, draft: ProjectDraft) -> Result<Project, TaskboardError> {
        let project = draft.into_project(ProjectId::new(), now());
        self.store.inner.write().await.projects.push(project.clone());
        Ok(project)
    }

    async fn get_by_id(&self, id: &ProjectId) -> Result<Option<Project>, TaskboardError> {
        let guard = self.store.inner.read().await;
        Ok(guard.projects.iter().find(|p| &p.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Project>, TaskboardError> {
        Ok(self.store.inner.read().await.projects.clone())
    }

    async fn update(
        &self,
        id: &ProjectId,
        patch: ProjectPatch,
    ) -> Result<Option<Project>, TaskboardError> {
        let mut guard = self.store.inner.write().await;
        let Some(project) = guard.projects.iter_mut().find(|p| &p.id == id) else {
            return Ok(None);
        };
        project.apply(patch, now());
        Ok(Some(project.clone()))
    }

    async fn delete(&self, id: &ProjectId) -> Result<bool, TaskboardError> {
        let mut guard = self.store.inner.write().await;
        let Some(index) = guard.projects.iter().position(|p| &p.id == id) else {
            return Ok(false);
        };
        guard.projects.remove(index);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_domain::project::NewProject;

    fn draft(name: &str) -> ProjectDraft {
        NewProject::new(name).into_draft().unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_project() {
        let repo = MemoryStore::new().project_repository();

        let created = repo.create(draft("Alpha")).await.unwrap();
        assert_eq!(created.created_at, created.updated_at);

        let fetched = repo.get_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_return_none_when_project_not_found() {
        let repo = MemoryStore::new().project_repository();
        assert!(repo.get_by_id(&ProjectId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_keep_insertion_order() {
        let repo = MemoryStore::new().project_repository();
        for name in ["c", "a", "b"] {
            repo.create(draft(name)).await.unwrap();
        }

        let names: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[tokio::test]
    async fn should_apply_patch_and_refresh_updated_at() {
        let repo = MemoryStore::new().project_repository();
        let created = repo.create(draft("Alpha")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;

        let updated = repo
            .update(
                &created.id,
                ProjectPatch {
                    name: None,
                    description: Some("notes".to_string()),
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Alpha");
        assert_eq!(updated.description, "notes");
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn should_return_none_when_updating_unknown_project() {
        let repo = MemoryStore::new().project_repository();
        let result = repo
            .update(&ProjectId::new(), ProjectPatch::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_report_whether_delete_removed_anything() {
        let repo = MemoryStore::new().project_repository();
        let keep = repo.create(draft("keep")).await.unwrap();
        let drop = repo.create(draft("drop")).await.unwrap();

        assert!(repo.delete(&drop.id).await.unwrap());
        assert!(!repo.delete(&drop.id).await.unwrap());

        let remaining = repo.get_all().await.unwrap();
        assert_eq!(remaining, vec![keep]);
    }
}
