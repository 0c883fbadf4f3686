//! WebServer-specific error types

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use scheduler::SchedulerError;
use serde_json::json;
use shared::{component_error, component_warn, ComponentId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type WebServerResult<T> = Result<T, WebServerError>;

impl From<JsonRejection> for WebServerError {
    fn from(rejection: JsonRejection) -> Self {
        WebServerError::InvalidRequest {
            details: rejection.body_text(),
        }
    }
}

impl WebServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebServerError::Scheduler(e) => match e {
                SchedulerError::InsufficientCandidates { .. } => StatusCode::CONFLICT,
                SchedulerError::DuplicateParticipant { .. }
                | SchedulerError::InvalidParticipant { .. }
                | SchedulerError::SameParticipant { .. } => StatusCode::BAD_REQUEST,
                SchedulerError::StorageError { .. } => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            WebServerError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown to the dashboard user
    pub fn user_message(&self) -> String {
        match self {
            WebServerError::Scheduler(SchedulerError::InsufficientCandidates { .. }) => {
                "Please select at least two team members who have not participated recently.".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let level = if status.is_server_error() { "error" } else { "warning" };

        if status.is_server_error() {
            component_error!(ComponentId::WebServer, "❌ Request failed: {}", self);
        } else {
            component_warn!(ComponentId::WebServer, "⚠️ Request rejected: {}", self);
        }

        let body = json!({
            "status": level,
            "message": self.user_message(),
        });
        (status, Json(body)).into_response()
    }
}
