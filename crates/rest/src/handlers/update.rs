//! Update interaction handler.
//!
//! Implements the FHIR [update interaction](https://hl7.org/fhir/http.html#update):
//! `PUT [base]/[type]/[id]`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use onecare_persistence::core::ResourceStorage;
use onecare_persistence::types::ResourceType;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::FhirResource;
use crate::responses::{ResourceHeaders, resource_response};
use crate::state::AppState;

/// Handler for the update interaction.
///
/// Replaces the whole resource. The id in the URL is authoritative.
///
/// # Response
///
/// - `200 OK` - The new version, with `ETag` and `Last-Modified`
/// - `400 Bad Request` - Body declares another type, or is not a resource
/// - `404 Not Found` - No resource with this id
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    Path((resource_type, id)): Path<(String, String)>,
    FhirResource(resource): FhirResource,
) -> RestResult<Response>
where
    S: ResourceStorage + Send + Sync,
{
    let resource_type: ResourceType = resource_type.parse()?;
    debug!(resource_type = %resource_type, id = %id, "Processing update request");

    let stored = state.storage().update(resource_type, &id, resource).await?;
    let headers = ResourceHeaders::from_stored(&stored);
    Ok(resource_response(StatusCode::OK, stored, headers))
}
