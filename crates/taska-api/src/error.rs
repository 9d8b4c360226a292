//! API error handling
//!
//! Every failure is rendered as a JSON body with an error identifier and a
//! human-readable message.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use taska_core::error::{TaskaError, ValidationErrors};
use taska_store::StoreError;
use tracing::error;
use utoipa::ToSchema;

/// API error types
#[derive(Debug)]
pub enum ApiError {
    NotFound { resource: &'static str, id: String },
    Validation(ValidationErrors),
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: impl std::fmt::Display) -> Self {
        ApiError::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        ApiError::Internal(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_identifier(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "urn:taska:api:errors:NotFound",
            ApiError::Validation(_) => "urn:taska:api:errors:PropertyConstraintViolation",
            ApiError::BadRequest(_) => "urn:taska:api:errors:InvalidRequestBody",
            ApiError::Conflict(_) => "urn:taska:api:errors:Conflict",
            ApiError::Internal(_) => "urn:taska:api:errors:InternalError",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::NotFound { resource, id } => format!("{} with id {} not found", resource, id),
            ApiError::Validation(errors) => errors.full_messages().join(", "),
            ApiError::BadRequest(msg) | ApiError::Conflict(msg) | ApiError::Internal(msg) => {
                msg.clone()
            }
        }
    }
}

impl From<TaskaError> for ApiError {
    fn from(err: TaskaError) -> Self {
        match err {
            TaskaError::NotFound { entity, value, .. } => ApiError::not_found(entity, value),
            TaskaError::Validation(errors) => ApiError::Validation(errors),
            TaskaError::Conflict { message } => ApiError::Conflict(message),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        TaskaError::from(err).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

/// Error body returned by every failing route
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Machine-readable error identifier
    pub error_identifier: String,
    /// Human-readable message
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self.message(), "Request failed");
        }

        let body = ErrorResponse {
            error_identifier: self.error_identifier().into(),
            message: self.message(),
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
