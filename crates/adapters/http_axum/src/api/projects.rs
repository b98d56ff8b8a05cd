//! JSON REST handlers for projects.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde::Deserialize;

use taskboard_app::ports::{ProjectRepository, TaskRepository};
use taskboard_domain::id::ProjectId;
use taskboard_domain::project::{NewProject, Project, ProjectPatch};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

const ENTITY: &str = "Project";

/// Request body for creating a project.
#[derive(Debug, Default, Deserialize)]
pub struct CreateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<CreateProjectRequest> for NewProject {
    fn from(req: CreateProjectRequest) -> Self {
        Self {
            name: req.name.unwrap_or_default(),
            description: req.description,
        }
    }
}

/// Request body for updating a project. Omitted fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<UpdateProjectRequest> for ProjectPatch {
    fn from(req: UpdateProjectRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

/// `GET /api/projects`
pub async fn list<PR, TR>(
    State(state): State<AppState<PR, TR>>,
) -> Result<ApiResponse<Vec<Project>>, ApiError>
where
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
{
    let projects = state.project_service.list_projects().await?;
    Ok(ApiResponse::Ok(projects))
}

/// `GET /api/projects/{id}`
pub async fn get<PR, TR>(
    State(state): State<AppState<PR, TR>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Project>, ApiError>
where
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
{
    let project_id: ProjectId = id.parse()?;
    state
        .project_service
        .get_project(&project_id)
        .await?
        .map(ApiResponse::Ok)
        .ok_or_else(|| ApiError::not_found(ENTITY, project_id))
}

/// `POST /api/projects`
pub async fn create<PR, TR>(
    State(state): State<AppState<PR, TR>>,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> Result<ApiResponse<Project>, ApiError>
where
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let created = state.project_service.create_project(req.into()).await?;
    Ok(ApiResponse::Created(created))
}

/// `PUT /api/projects/{id}`
pub async fn update<PR, TR>(
    State(state): State<AppState<PR, TR>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateProjectRequest>, JsonRejection>,
) -> Result<ApiResponse<Project>, ApiError>
where
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
{
    let project_id: ProjectId = id.parse()?;
    let Json(req) = payload?;
    state
        .project_service
        .update_project(&project_id, req.into())
        .await?
        .map(ApiResponse::Ok)
        .ok_or_else(|| ApiError::not_found(ENTITY, project_id))
}

/// `DELETE /api/projects/{id}`
pub async fn delete<PR, TR>(
    State(state): State<AppState<PR, TR>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError>
where
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
{
    let project_id: ProjectId = id.parse()?;
    if state.project_service.delete_project(&project_id).await? {
        Ok(ApiResponse::Message("Project deleted successfully"))
    } else {
        Err(ApiError::not_found(ENTITY, project_id))
    }
}
