//! FHIR resource extractor.
//!
//! Extracts FHIR resources from JSON request bodies.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::error::RestError;

/// Axum extractor for FHIR resources.
///
/// Parses the request body as JSON. Whether the payload is a usable
/// resource of the right type is decided by the store, not here.
///
/// # Example
///
/// ```rust,ignore
/// use onecare_rest::extractors::FhirResource;
///
/// async fn create_handler(FhirResource(resource): FhirResource) {
///     println!("Resource type: {}", resource["resourceType"]);
/// }
/// ```
#[derive(Debug)]
pub struct FhirResource(pub Value);

/// Error type for FHIR resource extraction failures.
#[derive(Debug)]
pub enum FhirResourceRejection {
    /// The body could not be read or parsed as JSON.
    InvalidJson(String),
    /// The body exceeded the configured size limit.
    TooLarge(String),
    /// Unsupported content type.
    UnsupportedMediaType(String),
}

impl IntoResponse for FhirResourceRejection {
    fn into_response(self) -> Response {
        let error = match self {
            FhirResourceRejection::InvalidJson(msg) => RestError::BadRequest {
                message: format!("Invalid JSON: {}", msg),
            },
            FhirResourceRejection::TooLarge(msg) => RestError::PayloadTooLarge { message: msg },
            FhirResourceRejection::UnsupportedMediaType(ct) => {
                RestError::UnsupportedMediaType { content_type: ct }
            }
        };
        error.into_response()
    }
}

impl<S> FromRequest<S> for FhirResource
where
    S: Send + Sync,
{
    type Rejection = FhirResourceRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Own the string before moving req
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/json")
            .to_string();

        if !content_type.contains("json") {
            return Err(FhirResourceRejection::UnsupportedMediaType(content_type));
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                FhirResourceRejection::TooLarge(e.body_text())
            } else {
                FhirResourceRejection::InvalidJson(e.body_text())
            }
        })?;

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| FhirResourceRejection::InvalidJson(e.to_string()))?;

        Ok(FhirResource(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_status() {
        let response = FhirResourceRejection::InvalidJson("eof".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response =
            FhirResourceRejection::UnsupportedMediaType("text/plain".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
