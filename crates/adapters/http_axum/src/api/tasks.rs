//! JSON REST handlers for tasks.
//!
//! `status` and `dueDate` arrive as raw strings and are parsed here so a
//! malformed value is reported as a validation failure.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde::Deserialize;

use taskboard_app::ports::{ProjectRepository, TaskRepository};
use taskboard_domain::error::ValidationError;
use taskboard_domain::id::{ProjectId, TaskId};
use taskboard_domain::task::{NewTask, Task, TaskPatch, TaskStatus, parse_due_date};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

const ENTITY: &str = "Task";

fn parse_status(value: Option<String>) -> Result<Option<TaskStatus>, ValidationError> {
    value.as_deref().map(TaskStatus::from_str).transpose()
}

/// Request body for creating a task inside a project.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub name: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
}

impl TryFrom<CreateTaskRequest> for NewTask {
    type Error = ValidationError;

    fn try_from(req: CreateTaskRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: req.name.unwrap_or_default(),
            due_date: req.due_date.as_deref().map(parse_due_date).transpose()?,
            status: parse_status(req.status)?,
        })
    }
}

/// Request body for updating a task. Omitted fields are left unchanged and
/// `"dueDate": null` clears the due date.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub due_date: Option<Option<String>>,
    pub status: Option<String>,
}

impl TryFrom<UpdateTaskRequest> for TaskPatch {
    type Error = ValidationError;

    fn try_from(req: UpdateTaskRequest) -> Result<Self, Self::Error> {
        let due_date = match req.due_date {
            None => None,
            Some(None) => Some(None),
            Some(Some(raw)) => Some(Some(parse_due_date(&raw)?)),
        };
        Ok(Self {
            name: req.name,
            due_date,
            status: parse_status(req.status)?,
        })
    }
}

/// Request body for `PATCH /api/tasks/{id}/status`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

/// `GET /api/projects/{id}/tasks`
pub async fn list<PR, TR>(
    State(state): State<AppState<PR, TR>>,
    Path(project_id): Path<String>,
) -> Result<ApiResponse<Vec<Task>>, ApiError>
where
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
{
    let project_id: ProjectId = project_id.parse()?;
    let tasks = state.task_service.list_tasks(&project_id).await?;
    Ok(ApiResponse::Ok(tasks))
}

/// `GET /api/tasks/{id}`
pub async fn get<PR, TR>(
    State(state): State<AppState<PR, TR>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Task>, ApiError>
where
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
{
    let task_id: TaskId = id.parse()?;
    state
        .task_service
        .get_task(&task_id)
        .await?
        .map(ApiResponse::Ok)
        .ok_or_else(|| ApiError::not_found(ENTITY, task_id))
}

/// `POST /api/projects/{id}/tasks`
pub async fn create<PR, TR>(
    State(state): State<AppState<PR, TR>>,
    Path(project_id): Path<String>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<ApiResponse<Task>, ApiError>
where
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
{
    let project_id: ProjectId = project_id.parse()?;
    let Json(req) = payload?;
    let input = NewTask::try_from(req)?;
    let created = state.task_service.create_task(&project_id, input).await?;
    Ok(ApiResponse::Created(created))
}

/// `PUT /api/tasks/{id}`
pub async fn update<PR, TR>(
    State(state): State<AppState<PR, TR>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<ApiResponse<Task>, ApiError>
where
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
{
    let task_id: TaskId = id.parse()?;
    let Json(req) = payload?;
    let patch = TaskPatch::try_from(req)?;
    state
        .task_service
        .update_task(&task_id, patch)
        .await?
        .map(ApiResponse::Ok)
        .ok_or_else(|| ApiError::not_found(ENTITY, task_id))
}

/// `PATCH /api/tasks/{id}/status`
pub async fn update_status<PR, TR>(
    State(state): State<AppState<PR, TR>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<ApiResponse<Task>, ApiError>
where
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
{
    let task_id: TaskId = id.parse()?;
    let Json(req) = payload?;
    let status = parse_status(req.status)?.ok_or(ValidationError::MissingStatus)?;
    state
        .task_service
        .update_task_status(&task_id, status)
        .await?
        .map(ApiResponse::Ok)
        .ok_or_else(|| ApiError::not_found(ENTITY, task_id))
}

/// `DELETE /api/tasks/{id}`
pub async fn delete<PR, TR>(
    State(state): State<AppState<PR, TR>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError>
where
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
{
    let task_id: TaskId = id.parse()?;
    if state.task_service.delete_task(&task_id).await? {
        Ok(ApiResponse::Message("Task deleted successfully"))
    } else {
        Err(ApiError::not_found(ENTITY, task_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update_request(json: &str) -> UpdateTaskRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn should_leave_due_date_untouched_when_field_is_absent() {
        let patch = TaskPatch::try_from(update_request(r#"{"name":"x"}"#)).unwrap();
        assert_eq!(patch.due_date, None);
    }

    #[test]
    fn should_clear_due_date_when_field_is_null() {
        let patch = TaskPatch::try_from(update_request(r#"{"dueDate":null}"#)).unwrap();
        assert_eq!(patch.due_date, Some(None));
    }

    #[test]
    fn should_reject_unknown_status_in_update() {
        let err = TaskPatch::try_from(update_request(r#"{"status":"archived"}"#)).unwrap_err();
        assert_eq!(err, ValidationError::InvalidStatus("archived".to_string()));
    }

    #[test]
    fn should_reject_malformed_due_date_on_create() {
        let req = CreateTaskRequest {
            name: Some("Ship".to_string()),
            due_date: Some("someday".to_string()),
            status: None,
        };
        assert!(matches!(
            NewTask::try_from(req),
            Err(ValidationError::InvalidDueDate(_))
        ));
    }

    #[test]
    fn should_leave_status_unset_when_omitted_on_create() {
        let req = CreateTaskRequest {
            name: Some("Ship".to_string()),
            ..CreateTaskRequest::default()
        };
        let input = NewTask::try_from(req).unwrap();
        assert_eq!(input.status, None);
    }
}
