//! `SQLite` implementation of [`TaskRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use taskboard_app::ports::TaskRepository;
use taskboard_domain::error::TaskboardError;
use taskboard_domain::id::{ProjectId, TaskId};
use taskboard_domain::task::{Task, TaskDraft, TaskPatch};
use taskboard_domain::time::now;

use crate::decode;
use crate::error::StorageError;

struct Wrapper(Task);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Task> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let project_id: String = row.try_get("project_id")?;
        let name: String = row.try_get("name")?;
        let due_date: Option<String> = row.try_get("due_date")?;
        let status: String = row.try_get("status")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(Task {
            id: decode::parse(&id)?,
            project_id: decode::parse(&project_id)?,
            name,
            due_date: due_date.as_deref().map(decode::date).transpose()?,
            status: decode::parse(&status)?,
            created_at: decode::timestamp(&created_at)?,
            updated_at: decode::timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO tasks (id, project_id, name, due_date, status, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM tasks WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM tasks ORDER BY rowid";
const SELECT_BY_PROJECT: &str = "SELECT * FROM tasks WHERE project_id = ? ORDER BY rowid";
const UPDATE: &str =
    "UPDATE tasks SET name = ?, due_date = ?, status = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM tasks WHERE id = ?";

/// `SQLite`-backed task repository.
#[derive(Clone)]
pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl SqliteTaskRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl TaskRepository for SqliteTaskRepository {
    fn create(&self, draft: TaskDraft) -> impl Future<Output = Result<Task, TaskboardError>> + Send {
        let pool = self.pool.clone();
        async move {
            let task = draft.into_task(TaskId::new(), now());
            sqlx::query(INSERT)
                .bind(task.id.as_str())
                .bind(task.project_id.as_str())
                .bind(&task.name)
                .bind(task.due_date.map(decode::format_date))
                .bind(task.status.as_str())
                .bind(decode::format_timestamp(task.created_at))
                .bind(decode::format_timestamp(task.updated_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(task)
        }
    }

    fn get_by_id(
        &self,
        id: &TaskId,
    ) -> impl Future<Output = Result<Option<Task>, TaskboardError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Task>, TaskboardError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_project(
        &self,
        project_id: &ProjectId,
    ) -> impl Future<Output = Result<Vec<Task>, TaskboardError>> + Send {
        let pool = self.pool.clone();
        let project_id = project_id.to_string();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_PROJECT)
                .bind(project_id)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: &TaskId,
        patch: TaskPatch,
    ) -> impl Future<Output = Result<Option<Task>, TaskboardError>> + Send {
        let pool = self.pool.clone();
        let id = id.to_string();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(&id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            let Some(Wrapper(mut task)) = row else {
                return Ok(None);
            };

            task.apply(patch, now());
            sqlx::query(UPDATE)
                .bind(&task.name)
                .bind(task.due_date.map(decode::format_date))
                .bind(task.status.as_str())
                .bind(decode::format_timestamp(task.updated_at))
                .bind(&id)
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            tx.commit().await.map_err(StorageError::from)?;

            Ok(Some(task))
        }
    }

    fn delete(&self, id: &TaskId) -> impl Future<Output = Result<bool, TaskboardError>> + Send {
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
