//! Read interaction handler.
//!
//! Implements the FHIR [read interaction](https://hl7.org/fhir/http.html#read):
//! `GET [base]/[type]/[id]`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use onecare_persistence::core::ResourceStorage;
use onecare_persistence::types::ResourceType;
use tracing::debug;

use crate::error::RestResult;
use crate::responses::{ResourceHeaders, resource_response};
use crate::state::AppState;

/// Handler for the read interaction.
///
/// # Response
///
/// - `200 OK` - The current version, with `ETag` and `Last-Modified`
/// - `404 Not Found` - No resource with this id
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    Path((resource_type, id)): Path<(String, String)>,
) -> RestResult<Response>
where
    S: ResourceStorage + Send + Sync,
{
    let resource_type: ResourceType = resource_type.parse()?;
    debug!(resource_type = %resource_type, id = %id, "Processing read request");

    let stored = state.storage().read(resource_type, &id).await?;
    let headers = ResourceHeaders::from_stored(&stored);
    Ok(resource_response(StatusCode::OK, stored, headers))
}
