//! The JSON envelope wrapped around every API body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// `{ "success": bool, "data"?: T, "message"?: string }`
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful response carrying a payload.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }
}

impl Envelope<()> {
    /// Successful response carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Failed response.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Possible successful responses of the API endpoints.
pub enum ApiResponse<T> {
    /// `200 OK` with the payload as `data`.
    Ok(T),
    /// `201 Created` with the new resource as `data`.
    Created(T),
    /// `200 OK` with a confirmation `message` and no data.
    Message(&'static str),
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(data) => Json(Envelope::data(data)).into_response(),
            Self::Created(data) => (StatusCode::CREATED, Json(Envelope::data(data))).into_response(),
            Self::Message(message) => Json(Envelope::message(message)).into_response(),
        }
    }
}
