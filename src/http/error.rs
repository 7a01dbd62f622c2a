//! Error responses for the HTTP surface.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::timeline::{
    domain::TimelineDomainError,
    services::{ErrorKind, EventLogServiceError, ReminderServiceError, TimelineServiceError},
};

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason.
    pub error: String,
}

/// Request failure rendered as a JSON error response.
///
/// Store failures are logged and answered with a generic message so that
/// database details never reach the client.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    /// Creates a validation failure.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Returns the failure category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the HTTP status code for this error.
    ///
    /// - Validation: 400 Bad Request
    /// - Not found: 404 Not Found
    /// - Store: 500 Internal Server Error
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Store => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn from_service(kind: ErrorKind, err: &impl std::error::Error) -> Self {
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

impl From<TimelineDomainError> for ApiError {
    fn from(err: TimelineDomainError) -> Self {
        Self::from_service(ErrorKind::Validation, &err)
    }
}

impl From<EventLogServiceError> for ApiError {
    fn from(err: EventLogServiceError) -> Self {
        Self::from_service(err.kind(), &err)
    }
}

impl From<ReminderServiceError> for ApiError {
    fn from(err: ReminderServiceError) -> Self {
        Self::from_service(err.kind(), &err)
    }
}

impl From<TimelineServiceError> for ApiError {
    fn from(err: TimelineServiceError) -> Self {
        Self::from_service(err.kind(), &err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if self.kind == ErrorKind::Store {
            error!(error = %self.message, "request failed in the store");
            "internal server error".to_owned()
        } else {
            self.message
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
