//! Error types for the FHIR REST API.
//!
//! Every error is rendered as a FHIR OperationOutcome.
//!
//! # Error Mapping
//!
//! | Storage Error | HTTP Status | FHIR Issue Code |
//! |--------------|-------------|-----------------|
//! | NotFound | 404 | not-found |
//! | AlreadyExists | 409 | conflict |
//! | TypeMismatch | 400 | invalid |
//! | InvalidResource | 400 | invalid |
//! | UnsupportedResourceType | 400 | not-supported |
//! | NotSupported | 501 | not-supported |
//! | anything else | 500 | exception |

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use onecare_persistence::error::{
    OperationError, ResourceError, SearchError, StorageError, ValidationError,
};
use std::fmt;
use tracing::warn;

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Resource not found (HTTP 404).
    NotFound {
        /// The resource type (e.g., "Patient").
        resource_type: String,
        /// The resource ID.
        id: String,
    },

    /// No route matches the request (HTTP 404).
    UnknownRoute {
        /// The request path.
        path: String,
    },

    /// Conflicting write, such as creating an id that exists (HTTP 409).
    Conflict {
        /// Message describing the conflict.
        message: String,
    },

    /// Bad request - validation error (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// The resource type in the path is not served (HTTP 400).
    UnsupportedResourceType {
        /// The requested type.
        resource_type: String,
    },

    /// Unsupported media type (HTTP 415).
    UnsupportedMediaType {
        /// The unsupported content type.
        content_type: String,
    },

    /// Request body over the configured limit (HTTP 413).
    PayloadTooLarge {
        /// Error message.
        message: String,
    },

    /// Not implemented (HTTP 501).
    NotImplemented {
        /// Description of what's not implemented.
        feature: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { resource_type, id } => {
                write!(f, "Resource not found: {}/{}", resource_type, id)
            }
            RestError::UnknownRoute { path } => write!(f, "Unknown route: {}", path),
            RestError::Conflict { message } => write!(f, "Conflict: {}", message),
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::UnsupportedResourceType { resource_type } => {
                write!(f, "Unsupported resource type: {}", resource_type)
            }
            RestError::UnsupportedMediaType { content_type } => {
                write!(f, "Unsupported media type: {}", content_type)
            }
            RestError::PayloadTooLarge { message } => write!(f, "Payload too large: {}", message),
            RestError::NotImplemented { feature } => write!(f, "Not implemented: {}", feature),
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl RestError {
    /// Returns the HTTP status and FHIR issue code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            RestError::NotFound { .. } | RestError::UnknownRoute { .. } => {
                (StatusCode::NOT_FOUND, "not-found")
            }
            RestError::Conflict { .. } => (StatusCode::CONFLICT, "conflict"),
            RestError::BadRequest { .. } => (StatusCode::BAD_REQUEST, "invalid"),
            RestError::UnsupportedResourceType { .. } => {
                (StatusCode::BAD_REQUEST, "not-supported")
            }
            RestError::UnsupportedMediaType { .. } => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, "not-supported")
            }
            RestError::PayloadTooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, "too-long"),
            RestError::NotImplemented { .. } => (StatusCode::NOT_IMPLEMENTED, "not-supported"),
            RestError::InternalError { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "exception"),
        }
    }

    fn details(&self) -> String {
        match self {
            RestError::NotFound { resource_type, id } => {
                format!("Resource {}/{} not found", resource_type, id)
            }
            RestError::UnknownRoute { path } => format!("No route matches {}", path),
            RestError::Conflict { message }
            | RestError::BadRequest { message }
            | RestError::PayloadTooLarge { message }
            | RestError::InternalError { message } => message.clone(),
            RestError::UnsupportedResourceType { resource_type } => {
                format!("Resource type {} is not supported", resource_type)
            }
            RestError::UnsupportedMediaType { content_type } => {
                format!("Content type {} is not supported", content_type)
            }
            RestError::NotImplemented { feature } => feature.clone(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() && status != StatusCode::NOT_IMPLEMENTED {
            warn!(error = %self, "Request failed");
        }

        let operation_outcome = create_operation_outcome("error", code, &self.details());
        (
            status,
            [(header::CONTENT_TYPE, "application/fhir+json")],
            Json(operation_outcome),
        )
            .into_response()
    }
}

/// Creates a FHIR OperationOutcome resource.
///
/// # Arguments
///
/// * `severity` - The issue severity (fatal, error, warning, information)
/// * `code` - The FHIR issue code
/// * `details` - Human-readable details
pub fn create_operation_outcome(severity: &str, code: &str, details: &str) -> serde_json::Value {
    serde_json::json!({
        "resourceType": "OperationOutcome",
        "issue": [{
            "severity": severity,
            "code": code,
            "details": {
                "text": details
            }
        }]
    })
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(e) => e.into(),
            StorageError::Validation(e) => e.into(),
            StorageError::Operation(e) => e.into(),
            StorageError::Search(e) => e.into(),
        }
    }
}

impl From<ResourceError> for RestError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound { resource_type, id } => RestError::NotFound {
                resource_type: resource_type.to_string(),
                id,
            },
            ResourceError::AlreadyExists { resource_type, id } => RestError::Conflict {
                message: format!("Resource {}/{} already exists", resource_type, id),
            },
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::UnsupportedResourceType { resource_type } => {
                RestError::UnsupportedResourceType { resource_type }
            }
            ValidationError::TypeMismatch { .. } | ValidationError::InvalidResource { .. } => {
                RestError::BadRequest {
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<OperationError> for RestError {
    fn from(err: OperationError) -> Self {
        RestError::NotImplemented {
            feature: err.to_string(),
        }
    }
}

impl From<SearchError> for RestError {
    fn from(err: SearchError) -> Self {
        RestError::BadRequest {
            message: err.to_string(),
        }
    }
}

/// Result type for REST operations.
pub type RestResult<T> = Result<T, RestError>;
