//! Error types for the Roster API.
//!
//! Every handler returns [`RestResult`]. Failures from the persistence layer
//! convert into [`RestError`] through `From`, and `RestError` is turned into
//! an HTTP response in exactly one place, its [`IntoResponse`] impl.
//!
//! # Error Mapping
//!
//! | Source | HTTP Status | `kind` |
//! |--------|-------------|--------|
//! | `ValidationError` | 400 | `validation` |
//! | Unknown coworker id | 404 | `not_found` |
//! | `BackendError::Unavailable` / `ConnectionFailed` | 503 | `unavailable` |
//! | `MappingError`, `BackendError::Internal` | 500 | `internal` |
//!
//! Error bodies have the shape:
//!
//! ```json
//! {"error": {"status": 400, "kind": "validation", "message": "salary must be greater than 0, got 0"}}
//! ```

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster_persistence::error::{BackendError, MappingError, StorageError, ValidationError};
use thiserror::Error;
use tracing::error;

/// The primary error type for REST API operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// Bad request - validation error (HTTP 400).
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Coworker not found (HTTP 404).
    #[error("Coworker not found: {id}")]
    NotFound {
        /// The requested identifier.
        id: String,
    },

    /// The document store is unreachable (HTTP 503).
    #[error("Service unavailable: {message}")]
    Unavailable {
        /// Error detail, logged but not returned to the client.
        message: String,
    },

    /// Internal server error (HTTP 500).
    #[error("Internal error: {message}")]
    InternalError {
        /// Error detail, logged but not returned to the client.
        message: String,
    },
}

impl RestError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the short machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            RestError::BadRequest { .. } => "validation",
            RestError::NotFound { .. } => "not_found",
            RestError::Unavailable { .. } => "unavailable",
            RestError::InternalError { .. } => "internal",
        }
    }

    /// Returns the message sent to the client.
    ///
    /// Server-side failures get a generic message; their detail only goes
    /// to the log.
    fn public_message(&self) -> String {
        match self {
            RestError::BadRequest { message } => message.clone(),
            RestError::NotFound { id } => format!("Coworker {} not found", id),
            RestError::Unavailable { .. } => "Document store is unavailable".to_string(),
            RestError::InternalError { .. } => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            RestError::Unavailable { message } | RestError::InternalError { message } => {
                error!(status = status.as_u16(), kind = self.kind(), error = %message, "Request failed");
            }
            _ => {}
        }

        let body = create_error_body(status, self.kind(), &self.public_message());
        (status, Json(body)).into_response()
    }
}

/// Creates the JSON error body.
fn create_error_body(status: StatusCode, kind: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "status": status.as_u16(),
            "kind": kind,
            "message": message
        }
    })
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Validation(e) => e.into(),
            StorageError::Mapping(e) => e.into(),
            StorageError::Backend(e) => e.into(),
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        RestError::BadRequest {
            message: err.to_string(),
        }
    }
}

impl From<MappingError> for RestError {
    fn from(err: MappingError) -> Self {
        RestError::InternalError {
            message: err.to_string(),
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        if err.is_unavailable() {
            RestError::Unavailable {
                message: err.to_string(),
            }
        } else {
            RestError::InternalError {
                message: err.to_string(),
            }
        }
    }
}

impl From<JsonRejection> for RestError {
    fn from(err: JsonRejection) -> Self {
        RestError::BadRequest {
            message: format!("Invalid JSON body: {}", err.body_text()),
        }
    }
}

impl From<QueryRejection> for RestError {
    fn from(err: QueryRejection) -> Self {
        RestError::BadRequest {
            message: format!("Invalid query parameters: {}", err.body_text()),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RestError::NotFound {
            id: "65f1c0ffee0000000000beef".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Coworker not found: 65f1c0ffee0000000000beef"
        );
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err: RestError = StorageError::Validation(ValidationError::NonPositiveSalary {
            salary: 0.0,
        })
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.kind(), "validation");
        assert!(err.public_message().contains("salary"));
    }

    #[test]
    fn test_mapping_maps_to_internal() {
        let err: RestError = StorageError::Mapping(MappingError::MissingField {
            field: "name".to_string(),
        })
        .into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn test_backend_unavailable_maps_to_503() {
        let err: RestError = StorageError::Backend(BackendError::Unavailable {
            backend_name: "mongodb".to_string(),
            message: "server selection timeout".to_string(),
        })
        .into();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.kind(), "unavailable");
    }

    #[test]
    fn test_backend_internal_maps_to_500() {
        let err: RestError = BackendError::Internal {
            backend_name: "mongodb".to_string(),
            message: "write conflict".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_create_error_body() {
        let body = create_error_body(StatusCode::BAD_REQUEST, "validation", "bad limit");
        assert_eq!(body["error"]["status"], 400);
        assert_eq!(body["error"]["kind"], "validation");
        assert_eq!(body["error"]["message"], "bad limit");
    }

    #[test]
    fn test_into_response_status() {
        let response = RestError::InternalError {
            message: "secret detail".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
