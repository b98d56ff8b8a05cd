//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod projects;
#[allow(clippy::missing_errors_doc)]
pub mod tasks;

use axum::Router;
use axum::routing::{get, patch};
use serde::{Deserialize, Deserializer};

use taskboard_app::ports::{ProjectRepository, TaskRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<PR, TR>() -> Router<AppState<PR, TR>>
where
    PR: ProjectRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
{
    Router::new()
        // Projects
        .route(
            "/projects",
            get(projects::list::<PR, TR>).post(projects::create::<PR, TR>),
        )
        .route(
            "/projects/{id}",
            get(projects::get::<PR, TR>)
                .put(projects::update::<PR, TR>)
                .delete(projects::delete::<PR, TR>),
        )
        // Tasks
        .route(
            "/projects/{id}/tasks",
            get(tasks::list::<PR, TR>).post(tasks::create::<PR, TR>),
        )
        .route(
            "/tasks/{id}",
            get(tasks::get::<PR, TR>)
                .put(tasks::update::<PR, TR>)
                .delete(tasks::delete::<PR, TR>),
        )
        .route("/tasks/{id}/status", patch(tasks::update_status::<PR, TR>))
}

/// Distinguish an absent field (`None`) from an explicit `null` (`Some(None)`).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
