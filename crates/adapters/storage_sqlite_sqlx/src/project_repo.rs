//! `SQLite` implementation of [`ProjectRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use taskboard_app::ports::ProjectRepository;
use taskboard_domain::error::TaskboardError;
use taskboard_domain::id::ProjectId;
use taskboard_domain::project::{Project, ProjectDraft, ProjectPatch};
use taskboard_domain::time::now;

use crate::decode;
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Project`].
struct Wrapper(Project);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Project> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let description: String = row.try_get("description")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(Project {
            id: decode::parse(&id)?,
            name,
            description,
            created_at: decode::timestamp(&created_at)?,
            updated_at: decode::timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO projects (id, name, description, created_at, updated_at) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM projects WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM projects ORDER BY rowid";
const UPDATE: &str = "UPDATE projects SET name = ?, description = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM projects WHERE id = ?";

/// `SQLite`-backed project repository.
#[derive(Clone)]
pub struct SqliteProjectRepository {
    pool: SqlitePool,
}

impl SqliteProjectRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ProjectRepository for SqliteProjectRepository {
    fn create(
        &self,
        draft: ProjectDraft,
    ) -> impl Future<Output = Result<Project, TaskboardError>> + Send {
        let pool = self.pool.clone();
        async move {
            let project = draft.into_project(ProjectId::new(), now());
            sqlx::query(INSERT)
                .bind(project.id.as_str())
                .bind(&project.name)
                .bind(&project.description)
                .bind(decode::format_timestamp(project.created_at))
                .bind(decode::format_timestamp(project.updated_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(project)
        }
    }

    fn get_by_id(
        &self,
        id: &ProjectId,
    ) -> impl Future<Output = Result<Option<Project>, TaskboardError>> + Send {
        let pool = self.pool.clone();
        let id = id.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Project>, TaskboardError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: &ProjectId,
        patch: ProjectPatch,
    ) -> impl Future<Output = Result<Option<Project>, TaskboardError>> + Send {
        let pool = self.pool.clone();
        let id = id.to_string();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(&id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            let Some(Wrapper(mut project)) = row else {
                return Ok(None);
            };

            project.apply(patch, now());
            sqlx::query(UPDATE)
                .bind(&project.name)
                .bind(&project.description)
                .bind(decode::format_timestamp(project.updated_at))
                .bind(&id)
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            tx.commit().await.map_err(StorageError::from)?;

            Ok(Some(project))
        }
    }

    fn delete(&self, id: &ProjectId) -> impl Future<Output = Result<bool, TaskboardError>> + Send {
        let pool = self.pool.clone();
        let id = id.to_string();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use taskboard_domain::project::NewProject;

    async fn setup() -> SqliteProjectRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteProjectRepository::new(db.pool().clone())
    }

    fn draft(name: &str) -> ProjectDraft {
        NewProject::new(name).into_draft().unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_project_when_valid() {
        let repo = setup().await;

        let created = repo.create(draft("Alpha")).await.unwrap();
        assert_eq!(created.description, "");

        let fetched = repo.get_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_return_none_when_project_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(&ProjectId::new()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_projects_in_insertion_order() {
        let repo = setup().await;
        for name in ["Gamma", "Alpha", "Beta"] {
            repo.create(draft(name)).await.unwrap();
        }

        let names: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Gamma", "Alpha", "Beta"]);
    }

    #[tokio::test]
    async fn should_persist_patch_when_project_exists() {
        let repo = setup().await;
        let created = repo.create(draft("Alpha")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;

        let updated = repo
            .update(
                &created.id,
                ProjectPatch {
                    name: Some("Renamed".to_string()),
                    description: None,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert!(updated.updated_at > created.updated_at);

        let fetched = repo.get_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched, updated);
        assert_eq!(fetched.name, "Renamed");
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn should_return_none_when_updating_unknown_project() {
        let repo = setup().await;
        let result = repo
            .update(&ProjectId::new(), ProjectPatch::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_report_whether_delete_removed_a_row() {
        let repo = setup().await;
        let created = repo.create(draft("Alpha")).await.unwrap();

        assert!(repo.delete(&created.id).await.unwrap());
        assert!(!repo.delete(&created.id).await.unwrap());
        assert!(repo.get_by_id(&created.id).await.unwrap().is_none());
    }
}
