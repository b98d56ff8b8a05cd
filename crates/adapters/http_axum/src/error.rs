//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use taskboard_domain::error::{NotFoundError, TaskboardError, ValidationError};

use crate::response::Envelope;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Failure of an API endpoint, rendered as a `success: false` envelope.
#[derive(Debug)]
pub enum ApiError {
    /// An error raised by the services or the domain.
    Domain(TaskboardError),
    /// The request body could not be read as the expected JSON document.
    ///
    /// Always answered with `400 Bad Request`, whatever axum's own status.
    Rejected(JsonRejection),
}

impl ApiError {
    /// Report that the entity addressed by the request does not exist.
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::Domain(TaskboardError::NotFound(NotFoundError {
            entity,
            id: id.to_string(),
        }))
    }
}

impl From<TaskboardError> for ApiError {
    fn from(err: TaskboardError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Domain(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        Self::Rejected(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(TaskboardError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(TaskboardError::NotFound(err)) => {
                tracing::debug!(entity = err.entity, id = %err.id, "not found");
                (StatusCode::NOT_FOUND, err.to_string())
            }
            Self::Domain(TaskboardError::Storage(err)) => {
                tracing::error!(error = ?err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            Self::Rejected(rejection) => {
                tracing::debug!(status = %rejection.status(), "request body rejected");
                (StatusCode::BAD_REQUEST, rejection.body_text())
            }
        };

        (status, Json(Envelope::failure(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_validation_to_bad_request() {
        let response = ApiError::from(ValidationError::MissingStatus).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_not_found_to_404() {
        let response = ApiError::not_found("Task", "abc").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_hide_storage_details_behind_500() {
        let err = TaskboardError::Storage(Box::new(std::io::Error::other("disk on fire")));
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
