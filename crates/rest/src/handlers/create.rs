//! Create interaction handler.
//!
//! Implements the FHIR [create interaction](https://hl7.org/fhir/http.html#create):
//! `POST [base]/[type]`

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

/// Handler for the create interaction.
///
/// The resource keeps a caller-supplied id; otherwise the server assigns one.
///
/// # Response
///
/// - `201 Created` - With `Location` and `ETag` headers
/// - `400 Bad Request` - Body declares another type, or is not a resource
/// - `409 Conflict` - A resource with the supplied id already exists
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    Path(resource_type): Path<String>,
    FhirResource(resource): FhirResource,
) -> RestResult<Response>
where
    S: ResourceStorage + Send + Sync,
{
    let resource_type: ResourceType = resource_type.parse()?;
    debug!(resource_type = %resource_type, "Processing create request");

    let stored = state.storage().create(resource_type, resource).await?;

    let location = format!("{}/{}", state.base_url(), stored.url());
    let headers = ResourceHeaders::from_stored(&stored).with_location(location);
    Ok(resource_response(StatusCode::CREATED, stored, headers))
}
