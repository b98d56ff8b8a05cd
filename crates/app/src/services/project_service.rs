//! Project service: use-cases for managing projects.

use taskboard_domain::error::TaskboardError;
use taskboard_domain::id::ProjectId;
use taskboard_domain::project::{NewProject, Project, ProjectPatch};

use crate::ports::ProjectRepository;

/// Application service for project CRUD operations.
///
/// Lookups that find nothing resolve to `None` (or `false` for deletes)
/// rather than an error, so callers decide how to report absence.
pub struct ProjectService<R> {
    repo: R,
}

impl<R: ProjectRepository> ProjectService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all projects in creation order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_projects(&self) -> Result<Vec<Project>, TaskboardError> {
        self.repo.get_all().await
    }

    /// Look up a project by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, id), fields(project_id = %id))]
    pub async fn get_project(&self, id: &ProjectId) -> Result<Option<Project>, TaskboardError> {
        self.repo.get_by_id(id).await
    }

    /// Create a project. A missing description becomes the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`TaskboardError::Validation`] if the name is blank, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, input), fields(project_name = %input.name))]
    pub async fn create_project(&self, input: NewProject) -> Result<Project, TaskboardError> {
        let draft = input.into_draft()?;
        let project = self.repo.create(draft).await?;
        tracing::info!(project_id = %project.id, "project created");
        Ok(project)
    }

    /// Apply a partial update to a project.
    ///
    /// Resolves to `None` when the project does not exist, before the patch
    /// itself is validated.
    ///
    /// # Errors
    ///
    /// Returns [`TaskboardError::Validation`] if a blank name is provided, or
    /// a storage error from the repository.
    #[tracing::instrument(skip(self, id, patch), fields(project_id = %id))]
    pub async fn update_project(
        &self,
        id: &ProjectId,
        patch: ProjectPatch,
    ) -> Result<Option<Project>, TaskboardError> {
        if self.repo.get_by_id(id).await?.is_none() {
            tracing::debug!("project not found");
            return Ok(None);
        }
        patch.validate()?;
        self.repo.update(id, patch).await
    }

    /// Delete a project by id. Tasks that belong to it are left in place.
    ///
    /// Resolves to `false` when the project does not exist.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, id), fields(project_id = %id))]
    pub async fn delete_project(&self, id: &ProjectId) -> Result<bool, TaskboardError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            tracing::info!("project deleted");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::InMemoryProjectRepo;
    use taskboard_domain::error::ValidationError;

    fn make_service() -> ProjectService<InMemoryProjectRepo> {
        ProjectService::new(InMemoryProjectRepo::default())
    }

    #[tokio::test]
    async fn should_create_project_with_empty_description_by_default() {
        let svc = make_service();

        let created = svc.create_project(NewProject::new("Alpha")).await.unwrap();
        assert_eq!(created.name, "Alpha");
        assert_eq!(created.description, "");

        let fetched = svc.get_project(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_assign_fresh_ids() {
        let svc = make_service();
        let a = svc.create_project(NewProject::new("Alpha")).await.unwrap();
        let b = svc.create_project(NewProject::new("Alpha")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn should_reject_create_when_name_is_empty() {
        let svc = make_service();

        let result = svc.create_project(NewProject::default()).await;
        assert!(matches!(
            result,
            Err(TaskboardError::Validation(ValidationError::EmptyName {
                entity: "Project"
            }))
        ));
        assert!(svc.list_projects().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_none_when_project_missing() {
        let svc = make_service();
        let result = svc.get_project(&ProjectId::new()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_projects_in_creation_order() {
        let svc = make_service();
        for name in ["Alpha", "Beta", "Gamma"] {
            svc.create_project(NewProject::new(name)).await.unwrap();
        }

        let names: Vec<String> = svc
            .list_projects()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Alpha", "Beta", "Gamma"]);
    }

    #[tokio::test]
    async fn should_patch_only_provided_fields() {
        let svc = make_service();
        let created = svc
            .create_project(NewProject::new("Alpha").with_description("first"))
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;

        let updated = svc
            .update_project(
                &created.id,
                ProjectPatch {
                    name: Some("Beta".to_string()),
                    description: None,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Beta");
        assert_eq!(updated.description, "first");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn should_return_none_when_updating_missing_project() {
        let svc = make_service();
        let result = svc
            .update_project(&ProjectId::new(), ProjectPatch::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_reject_update_with_blank_name() {
        let svc = make_service();
        let created = svc.create_project(NewProject::new("Alpha")).await.unwrap();

        let result = svc
            .update_project(
                &created.id,
                ProjectPatch {
                    name: Some("   ".to_string()),
                    description: None,
                },
            )
            .await;
        assert!(matches!(result, Err(TaskboardError::Validation(_))));

        let fetched = svc.get_project(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Alpha");
    }

    #[tokio::test]
    async fn should_report_missing_project_before_rejecting_blank_name() {
        let svc = make_service();
        let result = svc
            .update_project(
                &ProjectId::new(),
                ProjectPatch {
                    name: Some(String::new()),
                    description: None,
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_delete_project_once() {
        let svc = make_service();
        let created = svc.create_project(NewProject::new("Alpha")).await.unwrap();

        assert!(svc.delete_project(&created.id).await.unwrap());
        assert!(!svc.delete_project(&created.id).await.unwrap());
        assert!(svc.get_project(&created.id).await.unwrap().is_none());
    }
}
