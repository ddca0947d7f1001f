//! Delete interaction handler.
//!
//! `DELETE [base]/[type]/[id]` is routed so that callers get an explicit
//! `501 not-supported` rather than a generic 404/405.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use onecare_persistence::core::ResourceStorage;
use onecare_persistence::types::ResourceType;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the delete interaction.
///
/// # Response
///
/// - `204 No Content` - Only if a backend supports deletion
/// - `400 Bad Request` - Unknown resource type
/// - `501 Not Implemented` - Deletion is not supported
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    Path((resource_type, id)): Path<(String, String)>,
) -> RestResult<Response>
where
    S: ResourceStorage + Send + Sync,
{
    let resource_type: ResourceType = resource_type.parse()?;
    debug!(resource_type = %resource_type, id = %id, "Processing delete request");

    state.storage().delete(resource_type, &id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
