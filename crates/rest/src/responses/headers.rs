//! Response header generation.

use axum::http::{HeaderMap, HeaderValue, header};
use onecare_persistence::types::StoredResource;

/// Content type of every FHIR response body.
pub const FHIR_JSON: &str = "application/fhir+json";

/// Builder for resource response headers.
///
/// Generates standard FHIR response headers including:
/// - ETag (version identifier)
/// - Last-Modified
/// - Location (for create operations)
/// - Content-Type
#[derive(Debug, Default)]
pub struct ResourceHeaders {
    etag: Option<String>,
    last_modified: Option<String>,
    location: Option<String>,
}

impl ResourceHeaders {
    /// Creates headers from a StoredResource.
    pub fn from_stored(stored: &StoredResource) -> Self {
        Self {
            etag: Some(stored.etag()),
            last_modified: Some(
                stored
                    .last_updated()
                    .format("%a, %d %b %Y %H:%M:%S GMT")
                    .to_string(),
            ),
            location: None,
        }
    }

    /// Sets the Location URL.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Converts to an Axum HeaderMap.
    pub fn to_header_map(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(FHIR_JSON));

        let optional = [
            (header::ETAG, &self.etag),
            (header::LAST_MODIFIED, &self.last_modified),
            (header::LOCATION, &self.location),
        ];
        for (name, value) in optional {
            if let Some(value) = value.as_deref().and_then(|v| HeaderValue::from_str(v).ok()) {
                headers.insert(name, value);
            }
        }

        headers
    }

    /// Returns the ETag value.
    pub fn etag(&self) -> Option<&str> {
        self.etag.as_deref()
    }

    /// Returns the Location value.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}
