//! Response formatting for the FHIR REST API.
//!
//! - [`headers`] - Response header generation (ETag, Location, etc.)
//! - [`links`] - Searchset paging links

pub mod headers;
pub mod links;

pub use headers::{FHIR_JSON, ResourceHeaders};
pub use links::search_links;

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use onecare_persistence::types::{Bundle, StoredResource};

/// Builds a response carrying one resource and its version headers.
pub fn resource_response(
    status: StatusCode,
    stored: StoredResource,
    headers: ResourceHeaders,
) -> Response {
    (status, headers.to_header_map(), Json(stored.into_content())).into_response()
}

/// Builds a 200 response carrying a Bundle.
pub fn bundle_response(bundle: &Bundle) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, FHIR_JSON)],
        Json(bundle.to_json()),
    )
        .into_response()
}
